//! Integration tests for enrollment roster validation

use edu_gate::enroll::{parse_roster_csv, validate_roster, Severity};

fn known_batches() -> Vec<String> {
    vec!["Batch A".to_string(), "Batch B".to_string()]
}

#[test]
fn test_clean_roster_fixture() {
    let rows = parse_roster_csv("samples/rosters/clean.csv").expect("Failed to parse clean roster");
    assert_eq!(rows.len(), 6);

    let report = validate_roster(rows, &known_batches());
    assert!(
        report.is_clean(),
        "clean roster produced findings: {:?}",
        report.issues
    );
    assert_eq!(report.ready_row_count(), 6);
}

#[test]
fn test_problem_roster_fixture() {
    let rows =
        parse_roster_csv("samples/rosters/problems.csv").expect("Failed to parse problem roster");
    assert_eq!(rows.len(), 8);

    let report = validate_roster(rows, &known_batches());

    assert_eq!(report.error_count(), 6);
    assert_eq!(report.warning_count(), 1);
    // Only the clean first row and the unknown-batch row can be enrolled
    assert_eq!(report.ready_row_count(), 2);

    // Spot-check individual findings against their lines
    let message_at = |line: usize| -> Vec<&str> {
        report
            .issues
            .iter()
            .filter(|issue| issue.line_number == line)
            .map(|issue| issue.message.as_str())
            .collect()
    };

    assert!(message_at(3)[0].contains("missing full name"));
    assert!(message_at(4)[0].contains("missing username"));
    assert!(message_at(5)[0].contains("invalid email 'not-an-email'"));
    assert!(message_at(6)[0].contains("duplicate username 'ASHA.RAO'"));
    assert!(message_at(6)[0].contains("line 2"));
    assert!(message_at(7)[0].contains("duplicate email 'asha@example.org'"));
    assert!(message_at(8)[0].contains("invalid mobile number '12345'"));
    assert!(message_at(9)[0].contains("unknown batch 'Batch Z'"));

    let batch_issue = report
        .issues
        .iter()
        .find(|issue| issue.line_number == 9)
        .expect("line 9 has a finding");
    assert_eq!(batch_issue.severity, Severity::Warning);
}

#[test]
fn test_problem_roster_without_batch_list() {
    let rows =
        parse_roster_csv("samples/rosters/problems.csv").expect("Failed to parse problem roster");
    let report = validate_roster(rows, &[]);

    // Batch names are not checked without a known list
    assert_eq!(report.error_count(), 6);
    assert_eq!(report.warning_count(), 0);
}

#[test]
fn test_parse_nonexistent_file() {
    let result = parse_roster_csv("samples/rosters/nonexistent.csv");
    assert!(result.is_err(), "Should fail for nonexistent file");
}
