//! Integration tests for terminology and role display resolution
//!
//! Drives [`InstituteSession`] against real settings files on disk, the
//! way the CLI and a UI shell would.

use edu_gate::session::InstituteSession;
use edu_gate::settings::{SettingsFile, SettingsStorage};
use edu_gate::terminology::TerminologySetting;
use tempfile::TempDir;

/// Helper to build a session over a saved settings file
fn session_with(settings: &SettingsFile) -> (TempDir, InstituteSession) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let storage = SettingsStorage::new(temp_dir.path().join("institute.toml"));
    storage.save(settings).expect("Failed to save settings");
    (temp_dir, InstituteSession::new(storage))
}

fn naming(key: &str, custom_value: &str) -> TerminologySetting {
    TerminologySetting::new(key.to_string(), custom_value.to_string())
}

#[test]
fn test_defaults_resolve_without_any_settings_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let storage = SettingsStorage::new(temp_dir.path().join("never-written.toml"));
    let session = InstituteSession::new(storage);

    assert_eq!(session.get_terminology("Course", "Course"), "Course");
    assert_eq!(session.get_terminology("Batch", "Batch"), "Batch");
    assert_eq!(session.map_role_to_custom_name("STUDENT"), "Learner");
    assert_eq!(session.map_role_to_custom_name("ADMIN"), "Admin");
}

#[test]
fn test_override_wins_over_default() {
    let mut settings = SettingsFile::default();
    settings.upsert_naming(naming("Course", "Program"));
    settings.upsert_naming(naming("Batch", "Cohort"));
    let (_dir, session) = session_with(&settings);

    assert_eq!(session.get_terminology("Course", "Course"), "Program");
    assert_eq!(session.get_terminology("Batch", "Batch"), "Cohort");
    // Untouched keys keep their defaults
    assert_eq!(session.get_terminology("Subject", "Subject"), "Subject");
}

#[test]
fn test_empty_override_falls_back_to_default() {
    let mut settings = SettingsFile::default();
    settings.upsert_naming(naming("Course", ""));
    let (_dir, session) = session_with(&settings);

    assert_eq!(session.get_terminology("Course", "Course"), "Course");
}

#[test]
fn test_lookup_is_case_sensitive() {
    let mut settings = SettingsFile::default();
    settings.upsert_naming(naming("Course", "Program"));
    let (_dir, session) = session_with(&settings);

    assert_eq!(session.get_terminology("course", "course"), "course");
    assert_eq!(session.get_terminology("COURSE", "COURSE"), "COURSE");
    assert_eq!(session.get_terminology("Course", "Course"), "Program");
}

#[test]
fn test_student_displays_as_learner() {
    let (_dir, session) = session_with(&SettingsFile::default());

    assert_eq!(session.map_role_to_custom_name("STUDENT"), "Learner");
}

#[test]
fn test_learner_override_changes_student_display() {
    let mut settings = SettingsFile::default();
    settings.upsert_naming(naming("Learner", "Member"));
    let (_dir, session) = session_with(&settings);

    assert_eq!(session.map_role_to_custom_name("STUDENT"), "Member");
}

#[test]
fn test_unknown_role_passes_through_unchanged() {
    let (_dir, session) = session_with(&SettingsFile::default());

    assert_eq!(session.map_role_to_custom_name("PRINCIPAL"), "PRINCIPAL");
    assert_eq!(session.map_role_to_custom_name("student"), "student");
    assert_eq!(session.map_role_to_custom_name(""), "");
    assert_eq!(session.map_role_to_custom_name(" STUDENT"), " STUDENT");
}

#[test]
fn test_creator_roles_use_their_own_keys() {
    let mut settings = SettingsFile::default();
    settings.upsert_naming(naming("AssessmentCreator", "Examiner"));
    // Renaming the content type must not leak into the role display
    settings.upsert_naming(naming("Assessment", "Quiz"));
    let (_dir, session) = session_with(&settings);

    assert_eq!(session.map_role_to_custom_name("ASSESSMENT CREATOR"), "Examiner");
    assert_eq!(session.get_terminology("Assessment", "Assessment"), "Quiz");
    // The course-creator key is untouched, so its canonical label shows
    assert_eq!(
        session.map_role_to_custom_name("COURSE CREATOR"),
        "CourseCreator"
    );
}

#[test]
fn test_course_override_does_not_rename_course_creator() {
    let mut settings = SettingsFile::default();
    settings.upsert_naming(naming("Course", "Program"));
    let (_dir, session) = session_with(&settings);

    assert_eq!(session.get_terminology("Course", "Course"), "Program");
    assert_eq!(
        session.map_role_to_custom_name("COURSE CREATOR"),
        "CourseCreator"
    );
}

#[test]
fn test_resolution_is_stable_across_repeated_calls() {
    let mut settings = SettingsFile::default();
    settings.upsert_naming(naming("Level", "Grade"));
    let (_dir, session) = session_with(&settings);

    let first = session.get_terminology("Level", "Level");
    let second = session.get_terminology("Level", "Level");
    let third = session.get_terminology("Level", "Level");
    assert_eq!(first, "Grade");
    assert_eq!(first, second);
    assert_eq!(second, third);
}

#[test]
fn test_refresh_picks_up_saved_changes() {
    let mut settings = SettingsFile::default();
    settings.upsert_naming(naming("Course", "Program"));
    let (_dir, mut session) = session_with(&settings);

    assert_eq!(session.get_terminology("Course", "Course"), "Program");

    // Save a new override, then refresh the session
    settings.upsert_naming(naming("Course", "Pathway"));
    settings.upsert_naming(naming("Learner", "Member"));
    session
        .storage()
        .save(&settings)
        .expect("Failed to save settings");

    // The loaded snapshot stays stable until refresh is called
    assert_eq!(session.get_terminology("Course", "Course"), "Program");

    session.refresh();
    assert_eq!(session.get_terminology("Course", "Course"), "Pathway");
    assert_eq!(session.map_role_to_custom_name("STUDENT"), "Member");
}

#[test]
fn test_duplicate_keys_last_record_wins() {
    // Build the settings file by hand so the duplicate survives to disk
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("institute.toml");
    std::fs::write(
        &path,
        r#"
institute = "Northside Academy"

[[naming]]
key = "Course"
custom_value = "Program"

[[naming]]
key = "Course"
custom_value = "Pathway"
"#,
    )
    .expect("Failed to write settings file");

    let session = InstituteSession::new(SettingsStorage::new(path));
    assert_eq!(session.get_terminology("Course", "Course"), "Pathway");
    assert_eq!(session.institute_name(), "Northside Academy");
}

#[test]
fn test_malformed_settings_file_degrades_to_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("institute.toml");
    std::fs::write(&path, "this is { not toml").expect("Failed to write settings file");

    let session = InstituteSession::new(SettingsStorage::new(path));
    assert_eq!(session.get_terminology("Course", "Course"), "Course");
    assert_eq!(session.map_role_to_custom_name("STUDENT"), "Learner");
}

#[test]
fn test_custom_keys_resolve_with_caller_default() {
    let mut settings = SettingsFile::default();
    settings.upsert_naming(naming("Campus", "Site"));
    let (_dir, session) = session_with(&settings);

    assert_eq!(session.get_terminology("Campus", "Campus"), "Site");
    // A custom key with no record resolves to whatever the caller passes
    assert_eq!(session.get_terminology("Wing", "Wing"), "Wing");
}
