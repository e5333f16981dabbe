//! CSV parser for enrollment rosters
//!
//! Rosters are plain comma-separated files with one header line. Required
//! columns: `Full Name`, `Username`, `Email`. Optional columns: `Mobile`,
//! `Batch`, `Level`. Header matching is case-insensitive; values are
//! trimmed. Rows come back as-is here, validation happens in the parent
//! module.

use super::EnrollmentRow;
use std::error::Error;
use std::fs;
use std::path::Path;

const REQUIRED_HEADERS: &[&str] = &["Full Name", "Username", "Email"];

/// Parse an enrollment roster CSV file
///
/// # Arguments
/// * `path` - Path to the roster file
///
/// # Returns
/// All data rows in file order, with their 1-based line numbers
///
/// # Errors
/// Returns an error if the file cannot be read, is empty, or is missing a
/// required header column
pub fn parse_roster_csv<P: AsRef<Path>>(path: P) -> Result<Vec<EnrollmentRow>, Box<dyn Error>> {
    let content = fs::read_to_string(path)?;
    parse_roster_content(&content)
}

/// Parse roster CSV content
///
/// The first non-empty line is the header; every later non-empty line is a
/// data row. Short rows read missing fields as empty (validation will
/// flag them); extra fields are ignored.
///
/// # Errors
/// Returns an error if the content has no header line or the header is
/// missing a required column
pub fn parse_roster_content(content: &str) -> Result<Vec<EnrollmentRow>, Box<dyn Error>> {
    let mut lines = content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    let (_, header_line) = lines.next().ok_or("Roster file is empty")?;
    let headers = parse_csv_line(header_line);

    for required in REQUIRED_HEADERS {
        if !headers
            .iter()
            .any(|header| header.eq_ignore_ascii_case(required))
        {
            return Err(format!("Roster is missing required column '{required}'").into());
        }
    }

    let mut rows = Vec::new();
    for (index, line) in lines {
        rows.push(parse_roster_line(line, index + 1, &headers));
    }

    Ok(rows)
}

/// Parse a CSV line into trimmed fields
fn parse_csv_line(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .map(std::string::ToString::to_string)
        .collect()
}

/// Parse a single roster data line
fn parse_roster_line(line: &str, line_number: usize, headers: &[String]) -> EnrollmentRow {
    EnrollmentRow {
        line_number,
        full_name: get_field(line, "Full Name", headers).unwrap_or_default().to_string(),
        username: get_field(line, "Username", headers).unwrap_or_default().to_string(),
        email: get_field(line, "Email", headers).unwrap_or_default().to_string(),
        mobile: get_field(line, "Mobile", headers).unwrap_or_default().to_string(),
        batch: get_field(line, "Batch", headers).unwrap_or_default().to_string(),
        level: get_field(line, "Level", headers).unwrap_or_default().to_string(),
    }
}

/// Get a field value from a CSV line by header name
fn get_field<'a>(line: &'a str, header_name: &str, headers: &[String]) -> Option<&'a str> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();

    headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(header_name))
        .and_then(|idx| fields.get(idx))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Full Name,Username,Email,Mobile,Batch,Level
Asha Rao,asha.rao,asha@example.org,+919876543210,Batch A,Level 1
Vikram Shah,vikram,vikram@example.org,,Batch B,Level 2
";

    #[test]
    fn test_parse_sample_roster() {
        let rows = parse_roster_content(SAMPLE).expect("parses");
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].line_number, 2);
        assert_eq!(rows[0].full_name, "Asha Rao");
        assert_eq!(rows[0].username, "asha.rao");
        assert_eq!(rows[0].mobile, "+919876543210");

        assert_eq!(rows[1].line_number, 3);
        assert_eq!(rows[1].mobile, "");
        assert_eq!(rows[1].batch, "Batch B");
    }

    #[test]
    fn test_header_matching_is_case_insensitive() {
        let content = "full name,USERNAME,email\nAsha Rao,asha,asha@example.org\n";
        let rows = parse_roster_content(content).expect("parses");
        assert_eq!(rows[0].full_name, "Asha Rao");
        assert_eq!(rows[0].username, "asha");
    }

    #[test]
    fn test_missing_required_column_is_an_error() {
        let content = "Full Name,Email\nAsha Rao,asha@example.org\n";
        let err = parse_roster_content(content).expect_err("must fail");
        assert!(err.to_string().contains("Username"));
    }

    #[test]
    fn test_empty_content_is_an_error() {
        assert!(parse_roster_content("").is_err());
        assert!(parse_roster_content("\n\n  \n").is_err());
    }

    #[test]
    fn test_short_rows_read_as_empty_fields() {
        let content = "Full Name,Username,Email,Mobile\nAsha Rao,asha\n";
        let rows = parse_roster_content(content).expect("parses");
        assert_eq!(rows[0].email, "");
        assert_eq!(rows[0].mobile, "");
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let content = "Full Name,Username,Email\n\nAsha Rao,asha,asha@example.org\n\n";
        let rows = parse_roster_content(content).expect("parses");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].line_number, 3);
    }

    #[test]
    fn test_values_are_trimmed() {
        let content = "Full Name, Username , Email\n  Asha Rao ,  asha , asha@example.org \n";
        let rows = parse_roster_content(content).expect("parses");
        assert_eq!(rows[0].full_name, "Asha Rao");
        assert_eq!(rows[0].username, "asha");
        assert_eq!(rows[0].email, "asha@example.org");
    }
}
