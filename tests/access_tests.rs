//! Integration tests for role access predicates
//!
//! Exercises the string-facing predicates the way a UI shell calls them:
//! raw backend role strings in, plain booleans out.

use edu_gate::roles::RoleKey;
use edu_gate::session::InstituteSession;
use edu_gate::settings::{SettingsFile, SettingsStorage, TabSetting};
use tempfile::TempDir;

/// Helper to build a session over a saved settings file
fn session_with(settings: &SettingsFile) -> (TempDir, InstituteSession) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let storage = SettingsStorage::new(temp_dir.path().join("institute.toml"));
    storage.save(settings).expect("Failed to save settings");
    (temp_dir, InstituteSession::new(storage))
}

fn default_session() -> (TempDir, InstituteSession) {
    session_with(&SettingsFile::default())
}

#[test]
fn test_teacher_dashboard_access() {
    let (_dir, session) = default_session();
    assert!(session.has_tab_access("TEACHER", "dashboard"));
}

#[test]
fn test_teacher_manage_institute_children() {
    let (_dir, session) = default_session();
    assert!(session.has_child_tab_access("TEACHER", "manageInstitute", "batches"));
    assert!(!session.has_child_tab_access("TEACHER", "manageInstitute", "session"));
}

#[test]
fn test_unknown_inputs_are_denied_not_errors() {
    let (_dir, session) = default_session();

    // Unknown role
    assert!(!session.has_tab_access("PRINCIPAL", "dashboard"));
    // Role strings are exact: no case folding, no trimming
    assert!(!session.has_tab_access("teacher", "dashboard"));
    assert!(!session.has_tab_access("TEACHER ", "dashboard"));
    // Unknown tab / child / feature
    assert!(!session.has_tab_access("TEACHER", "payroll"));
    assert!(!session.has_child_tab_access("TEACHER", "dashboard", "anything"));
    assert!(!session.has_feature_access("TEACHER", "dashboard", "anything"));
    // Empty strings everywhere
    assert!(!session.has_tab_access("", ""));
    assert!(!session.has_child_tab_access("", "", ""));
    assert!(!session.has_feature_access("", "", ""));
}

#[test]
fn test_feature_access_differs_per_role() {
    let (_dir, session) = default_session();

    assert!(session.has_feature_access("ADMIN", "students", "bulkUpload"));
    assert!(!session.has_feature_access("TEACHER", "students", "bulkUpload"));

    assert!(session.has_feature_access("ADMIN", "assessmentCenter", "evaluateSubmissions"));
    assert!(session.has_feature_access("EVALUATOR", "assessmentCenter", "evaluateSubmissions"));
    assert!(!session.has_feature_access("STUDENT", "assessmentCenter", "evaluateSubmissions"));
}

#[test]
fn test_creator_roles_have_narrow_scopes() {
    let (_dir, session) = default_session();

    assert!(session.has_tab_access("COURSE CREATOR", "studyLibrary"));
    assert!(!session.has_tab_access("COURSE CREATOR", "assessmentCenter"));

    assert!(session.has_tab_access("ASSESSMENT CREATOR", "assessmentCenter"));
    assert!(!session.has_tab_access("ASSESSMENT CREATOR", "studyLibrary"));
    assert!(!session.has_child_tab_access("ASSESSMENT CREATOR", "assessmentCenter", "evaluations"));
}

#[test]
fn test_access_checks_ignore_naming_overrides() {
    // Renaming terminology never changes what a role can open
    let mut settings = SettingsFile::default();
    settings.upsert_naming(edu_gate::terminology::TerminologySetting::new(
        "Batch".to_string(),
        "Cohort".to_string(),
    ));
    let (_dir, session) = session_with(&settings);

    assert!(session.has_child_tab_access("TEACHER", "manageInstitute", "batches"));
    assert!(!session.has_child_tab_access("TEACHER", "manageInstitute", "cohorts"));
}

#[test]
fn test_visible_tabs_respect_hidden_and_ordered_settings() {
    let mut settings = SettingsFile::default();
    settings.upsert_tab(TabSetting {
        id: "aiCenter".to_string(),
        visible: false,
        order: 0,
    });
    settings.upsert_tab(TabSetting::new("studyLibrary".to_string(), 0));
    settings.upsert_tab(TabSetting::new("dashboard".to_string(), 1));
    let (_dir, session) = session_with(&settings);

    let tabs = session.visible_tabs(RoleKey::CourseCreator);
    // Built-in strip is dashboard, studyLibrary, aiCenter
    assert_eq!(tabs, vec!["studyLibrary", "dashboard"]);
}

#[test]
fn test_tab_settings_never_grant_denied_tabs() {
    // Pinning a tab the role cannot open must not make it appear
    let mut settings = SettingsFile::default();
    settings.upsert_tab(TabSetting::new("manageInstitute".to_string(), 0));
    let (_dir, session) = session_with(&settings);

    let tabs = session.visible_tabs(RoleKey::Student);
    assert!(!tabs.contains(&"manageInstitute"));
    assert_eq!(
        tabs,
        vec!["dashboard", "studyLibrary", "assessmentCenter", "liveSessions"]
    );
}

#[test]
fn test_hidden_tab_still_answers_access_checks() {
    // Hiding adjusts the strip, not the permission itself
    let mut settings = SettingsFile::default();
    settings.upsert_tab(TabSetting {
        id: "dashboard".to_string(),
        visible: false,
        order: 0,
    });
    let (_dir, session) = session_with(&settings);

    assert!(session.has_tab_access("TEACHER", "dashboard"));
    assert!(!session.visible_tabs(RoleKey::Teacher).contains(&"dashboard"));
}

#[test]
fn test_all_roles_have_dashboard() {
    let (_dir, session) = default_session();
    for role in RoleKey::ALL {
        assert!(
            session.has_tab_access(role.as_str(), "dashboard"),
            "{role} should see the dashboard"
        );
    }
}
