//! Bulk enrollment roster validation
//!
//! Institutes enroll students in bulk from a CSV roster. This module
//! parses the roster and checks every row before anything is sent to the
//! backend: required fields, email and mobile shape, duplicates within the
//! file, unknown batch names. Findings are data, not errors; only an
//! unreadable file or a missing header column fails the whole run.

mod csv;

pub use csv::{parse_roster_content, parse_roster_csv};

use std::collections::{HashMap, HashSet};
use std::fmt;

/// One roster row as parsed from the CSV
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrollmentRow {
    /// 1-based line number in the source file
    pub line_number: usize,
    /// Student's full name
    pub full_name: String,
    /// Login username, unique per institute
    pub username: String,
    /// Contact email
    pub email: String,
    /// Contact mobile number, optional
    pub mobile: String,
    /// Batch the student enrolls into
    pub batch: String,
    /// Level/grade of the student
    pub level: String,
}

/// How serious a finding is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The row cannot be enrolled as-is
    Error,
    /// The row can be enrolled but deserves a look
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

/// One finding for one roster row
#[derive(Debug, Clone)]
pub struct RowIssue {
    /// Line the finding applies to
    pub line_number: usize,
    /// Error or warning
    pub severity: Severity,
    /// Human-readable description
    pub message: String,
}

impl RowIssue {
    fn error(line_number: usize, message: String) -> Self {
        Self {
            line_number,
            severity: Severity::Error,
            message,
        }
    }

    fn warning(line_number: usize, message: String) -> Self {
        Self {
            line_number,
            severity: Severity::Warning,
            message,
        }
    }
}

/// Outcome of validating a whole roster
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// All parsed rows, in file order
    pub rows: Vec<EnrollmentRow>,
    /// All findings, in file order
    pub issues: Vec<RowIssue>,
}

impl ValidationReport {
    /// Number of error-severity findings
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == Severity::Error)
            .count()
    }

    /// Number of warning-severity findings
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == Severity::Warning)
            .count()
    }

    /// Whether the roster has no findings at all
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Rows with no error-severity finding, i.e. ready to enroll
    #[must_use]
    pub fn ready_row_count(&self) -> usize {
        let error_lines: HashSet<usize> = self
            .issues
            .iter()
            .filter(|issue| issue.severity == Severity::Error)
            .map(|issue| issue.line_number)
            .collect();

        self.rows
            .iter()
            .filter(|row| !error_lines.contains(&row.line_number))
            .count()
    }
}

/// Validate a parsed roster
///
/// Checks, per row: required fields (full name, username, email), email
/// and mobile shape, and duplicate usernames/emails within the file
/// (case-insensitive; the later occurrence is flagged). When
/// `known_batches` is non-empty, rows naming a batch outside it get a
/// warning; with an empty list batch names are not checked.
///
/// # Arguments
/// * `rows` - Parsed roster rows; the report takes ownership
/// * `known_batches` - Batch names that exist at the institute
#[must_use]
pub fn validate_roster(rows: Vec<EnrollmentRow>, known_batches: &[String]) -> ValidationReport {
    let mut issues = Vec::new();
    let mut seen_usernames: HashMap<String, usize> = HashMap::new();
    let mut seen_emails: HashMap<String, usize> = HashMap::new();

    for row in &rows {
        let line = row.line_number;

        if row.full_name.is_empty() {
            issues.push(RowIssue::error(line, "missing full name".to_string()));
        }

        if row.username.is_empty() {
            issues.push(RowIssue::error(line, "missing username".to_string()));
        } else {
            let folded = row.username.to_lowercase();
            match seen_usernames.get(&folded) {
                Some(first) => issues.push(RowIssue::error(
                    line,
                    format!("duplicate username '{}' (first used on line {first})", row.username),
                )),
                None => {
                    seen_usernames.insert(folded, line);
                }
            }
        }

        if row.email.is_empty() {
            issues.push(RowIssue::error(line, "missing email".to_string()));
        } else if is_valid_email(&row.email) {
            let folded = row.email.to_lowercase();
            match seen_emails.get(&folded) {
                Some(first) => issues.push(RowIssue::error(
                    line,
                    format!("duplicate email '{}' (first used on line {first})", row.email),
                )),
                None => {
                    seen_emails.insert(folded, line);
                }
            }
        } else {
            issues.push(RowIssue::error(
                line,
                format!("invalid email '{}'", row.email),
            ));
        }

        if !row.mobile.is_empty() && !is_valid_mobile(&row.mobile) {
            issues.push(RowIssue::error(
                line,
                format!("invalid mobile number '{}'", row.mobile),
            ));
        }

        if !known_batches.is_empty()
            && !row.batch.is_empty()
            && !known_batches.iter().any(|batch| batch == &row.batch)
        {
            issues.push(RowIssue::warning(
                line,
                format!("unknown batch '{}'", row.batch),
            ));
        }
    }

    ValidationReport { rows, issues }
}

/// Shape check for an email address; real verification is the backend's job
fn is_valid_email(value: &str) -> bool {
    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Shape check for a mobile number: optional leading `+`, 8 to 15 digits
fn is_valid_mobile(value: &str) -> bool {
    let digits = value.strip_prefix('+').unwrap_or(value);
    (8..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(line: usize, name: &str, username: &str, email: &str) -> EnrollmentRow {
        EnrollmentRow {
            line_number: line,
            full_name: name.to_string(),
            username: username.to_string(),
            email: email.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_clean_roster() {
        let rows = vec![
            row(2, "Asha Rao", "asha.rao", "asha@example.org"),
            row(3, "Vikram Shah", "vikram", "vikram@example.org"),
        ];
        let report = validate_roster(rows, &[]);
        assert!(report.is_clean());
        assert_eq!(report.ready_row_count(), 2);
    }

    #[test]
    fn test_missing_required_fields() {
        let rows = vec![row(2, "", "", "")];
        let report = validate_roster(rows, &[]);
        assert_eq!(report.error_count(), 3);
        assert_eq!(report.ready_row_count(), 0);
    }

    #[test]
    fn test_duplicate_username_is_case_insensitive() {
        let rows = vec![
            row(2, "Asha Rao", "asha", "asha@example.org"),
            row(3, "Other Asha", "ASHA", "other@example.org"),
        ];
        let report = validate_roster(rows, &[]);
        assert_eq!(report.error_count(), 1);
        assert!(report.issues[0].message.contains("duplicate username"));
        assert!(report.issues[0].message.contains("line 2"));
        assert_eq!(report.issues[0].line_number, 3);
    }

    #[test]
    fn test_duplicate_email_flagged_on_later_row() {
        let rows = vec![
            row(2, "Asha Rao", "asha", "shared@example.org"),
            row(3, "Vikram Shah", "vikram", "shared@example.org"),
        ];
        let report = validate_roster(rows, &[]);
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.issues[0].line_number, 3);
        assert_eq!(report.ready_row_count(), 1);
    }

    #[test]
    fn test_invalid_email_shapes() {
        assert!(is_valid_email("a@b.org"));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("@missing-local.org"));
        assert!(!is_valid_email("a@nodot"));
        assert!(!is_valid_email("a@.leading"));
        assert!(!is_valid_email("a@trailing."));
        assert!(!is_valid_email("two@at@signs.org"));
    }

    #[test]
    fn test_mobile_shapes() {
        assert!(is_valid_mobile("9876543210"));
        assert!(is_valid_mobile("+919876543210"));
        assert!(!is_valid_mobile("12345"));
        assert!(!is_valid_mobile("phone-number"));
        assert!(!is_valid_mobile("+"));
    }

    #[test]
    fn test_empty_mobile_is_fine() {
        let rows = vec![row(2, "Asha Rao", "asha", "asha@example.org")];
        let report = validate_roster(rows, &[]);
        assert!(report.is_clean());
    }

    #[test]
    fn test_unknown_batch_is_a_warning() {
        let mut r = row(2, "Asha Rao", "asha", "asha@example.org");
        r.batch = "Batch Z".to_string();
        let known = vec!["Batch A".to_string(), "Batch B".to_string()];
        let report = validate_roster(vec![r], &known);
        assert_eq!(report.error_count(), 0);
        assert_eq!(report.warning_count(), 1);
        // Warnings do not block enrollment
        assert_eq!(report.ready_row_count(), 1);
    }

    #[test]
    fn test_batches_not_checked_without_known_list() {
        let mut r = row(2, "Asha Rao", "asha", "asha@example.org");
        r.batch = "Anything".to_string();
        let report = validate_roster(vec![r], &[]);
        assert!(report.is_clean());
    }
}
