//! Report command handler
//!
//! Generates institute access and terminology reports in Markdown or
//! HTML from the effective settings.

use edu_gate::config::Config;
use edu_gate::report::{
    formats::ReportFormat, HtmlReporter, MarkdownReporter, ReportContext, ReportGenerator,
};
use edu_gate::session::InstituteSession;
use logger::{error, info};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Run the report command.
///
/// # Arguments
/// * `output_file` - Optional output path
/// * `format_str` - Report format (markdown, html)
/// * `config` - Configuration containing the reports directory and settings file
pub fn run(output_file: Option<&Path>, format_str: &str, config: &Config) {
    if let Err(err) = generate_report(output_file, format_str, config) {
        error!("Report generation failed: {err}");
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn generate_report(
    output_file: Option<&Path>,
    format_str: &str,
    config: &Config,
) -> Result<(), String> {
    // Parse the format
    let format =
        ReportFormat::from_str(format_str).map_err(|e| format!("✗ {e}. Use: markdown or html"))?;

    // Load the institute settings through a session
    let session = InstituteSession::from_config(config);
    info!(
        "Institute settings loaded: {}",
        session.storage().path().display()
    );

    // Determine output path
    let final_output_path: PathBuf = if let Some(output) = output_file {
        output.to_path_buf()
    } else {
        let reports_dir = PathBuf::from(&config.paths.reports_dir);
        std::fs::create_dir_all(&reports_dir).map_err(|e| {
            format!(
                "✗ Failed to create reports directory {}: {e}",
                reports_dir.display()
            )
        })?;

        let output_filename = format!("access_report.{}", format.extension());
        reports_dir.join(output_filename)
    };

    // Write the report
    let ctx = ReportContext::new(&session);
    write_report(&ctx, format, &final_output_path)?;

    println!("✓ Report generated: {}", final_output_path.display());
    info!("Report exported to: {}", final_output_path.display());

    print_summary(&ctx);

    Ok(())
}

/// Write the report to a file in the specified format
fn write_report(
    ctx: &ReportContext,
    format: ReportFormat,
    output_path: &Path,
) -> Result<(), String> {
    match format {
        ReportFormat::Markdown => {
            let reporter = MarkdownReporter::new();
            reporter
                .generate(ctx, output_path)
                .map_err(|e| format!("✗ Failed to generate Markdown report: {e}"))?;
        }
        ReportFormat::Html => {
            let reporter = HtmlReporter::new();
            reporter
                .generate(ctx, output_path)
                .map_err(|e| format!("✗ Failed to generate HTML report: {e}"))?;
        }
    }

    Ok(())
}

/// Print a summary of the report
fn print_summary(ctx: &ReportContext) {
    let overrides = ctx
        .terminology_rows()
        .iter()
        .filter(|row| row.overridden)
        .count();
    let hidden_tabs = ctx
        .session
        .tab_settings()
        .iter()
        .filter(|tab| !tab.visible)
        .count();

    println!("\n=== Summary ===");
    println!("Institute: {}", ctx.institute_label());
    println!("Naming overrides: {overrides}");
    println!("Hidden tabs: {hidden_tabs}");
    println!("Roles covered: {}", ctx.role_rows().len());
}
