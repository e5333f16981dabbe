//! Enroll command handler
//!
//! Validates bulk enrollment rosters before they are handed to the
//! import pipeline.

use crate::args::EnrollSubcommand;
use edu_gate::enroll::{parse_roster_csv, validate_roster};
use logger::{error, info};
use std::path::Path;

/// Dispatch enroll subcommands
pub fn run(subcommand: &EnrollSubcommand) {
    match subcommand {
        EnrollSubcommand::Check { file, batches } => handle_enroll_check(file, batches),
    }
}

/// Handle the enroll check subcommand
fn handle_enroll_check(file: &Path, batches: &[String]) {
    let rows = match parse_roster_csv(file) {
        Ok(rows) => rows,
        Err(e) => {
            error!("Failed to read roster {}: {e}", file.display());
            eprintln!("✗ Failed to read {}: {e}", file.display());
            std::process::exit(1);
        }
    };
    info!("Roster loaded: {}", file.display());

    let report = validate_roster(rows, batches);

    for issue in &report.issues {
        println!(
            "line {}: {}: {}",
            issue.line_number, issue.severity, issue.message
        );
    }

    println!("\n=== Roster Summary ===");
    println!("Rows checked: {}", report.rows.len());
    println!("Ready to import: {}", report.ready_row_count());
    println!("Errors: {}", report.error_count());
    println!("Warnings: {}", report.warning_count());

    if report.error_count() > 0 {
        eprintln!("\n✗ Roster has errors; fix them before importing.");
        std::process::exit(1);
    }
    println!("\n✓ Roster is ready to import.");
}
