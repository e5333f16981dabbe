//! Markdown report generator
//!
//! Renders the access and terminology report as plain Markdown tables.
//! These reports render well in GitHub, GitLab, and VS Code.

use crate::core::report::{ReportContext, ReportGenerator};
use crate::core::roles::RoleKey;
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = MARKDOWN_TEMPLATE.to_string();

        output = output.replace("{{institute}}", ctx.institute_label());
        output = output.replace("{{version}}", crate::core::get_version());

        let terminology_table = Self::generate_terminology_table(ctx);
        output = output.replace("{{terminology_table}}", &terminology_table);

        let role_table = Self::generate_role_table(ctx);
        output = output.replace("{{role_table}}", &role_table);

        let tab_adjustments = Self::generate_tab_adjustments(ctx);
        output = output.replace("{{tab_adjustments}}", &tab_adjustments);

        let access_matrix = Self::generate_access_matrix(ctx);
        output = output.replace("{{access_matrix}}", &access_matrix);

        output
    }

    /// Generate the effective-terminology table
    fn generate_terminology_table(ctx: &ReportContext) -> String {
        let mut table = String::new();

        table.push_str("| Key | Effective label | Overridden |\n");
        table.push_str("|---|---|---|\n");

        for row in ctx.terminology_rows() {
            let _ = writeln!(
                table,
                "| {} | {} | {} |",
                row.key,
                row.effective,
                mark(row.overridden)
            );
        }

        table
    }

    /// Generate the role display-name table
    fn generate_role_table(ctx: &ReportContext) -> String {
        let mut table = String::new();

        table.push_str("| Backend role | Displayed as |\n");
        table.push_str("|---|---|\n");

        for (role, label) in ctx.role_rows() {
            let _ = writeln!(table, "| {role} | {label} |");
        }

        table
    }

    /// Generate the institute tab-adjustments table
    fn generate_tab_adjustments(ctx: &ReportContext) -> String {
        let settings = ctx.session.tab_settings();
        if settings.is_empty() {
            return "No institute-level tab adjustments.\n".to_string();
        }

        let mut table = String::new();
        table.push_str("| Tab | Visible | Position |\n");
        table.push_str("|---|---|---|\n");

        for setting in settings {
            let _ = writeln!(
                table,
                "| {} | {} | {} |",
                setting.id,
                mark(setting.visible),
                setting.order
            );
        }

        table
    }

    /// Generate the per-role access matrix section
    fn generate_access_matrix(ctx: &ReportContext) -> String {
        let mut section = String::new();

        for role in RoleKey::ALL {
            let label = ctx.session.map_role_to_custom_name(role.as_str());
            let _ = writeln!(section, "### {role} (displays as \"{label}\")\n");

            let visible = ctx.session.visible_tabs(role);
            if visible.is_empty() {
                section.push_str("No visible tabs.\n\n");
            } else {
                let _ = writeln!(section, "Visible tabs: {}\n", visible.join(", "));
            }

            section.push_str("| Tab | Access | Children | Features |\n");
            section.push_str("|---|---|---|---|\n");

            for grant in ctx.session.matrix().grants(role) {
                let children = join_flags(grant.children());
                let features = join_flags(grant.features());
                let _ = writeln!(
                    section,
                    "| {} | {} | {} | {} |",
                    grant.id,
                    mark(grant.access),
                    children,
                    features
                );
            }

            section.push('\n');
        }

        section
    }
}

/// Join `(id, flag)` pairs into one table cell
fn join_flags(flags: impl Iterator<Item = (&'static str, bool)>) -> String {
    let parts: Vec<String> = flags
        .map(|(id, flag)| format!("{id} {}", mark(flag)))
        .collect();

    if parts.is_empty() {
        "-".to_string()
    } else {
        parts.join(", ")
    }
}

const fn mark(flag: bool) -> &'static str {
    if flag {
        "✓"
    } else {
        "✗"
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::InstituteSession;
    use crate::core::settings::SettingsStorage;
    use std::path::PathBuf;

    fn default_session() -> InstituteSession {
        InstituteSession::new(SettingsStorage::new(PathBuf::from(
            "/nonexistent/edugate/institute.toml",
        )))
    }

    #[test]
    fn test_render_with_defaults() {
        let session = default_session();
        let ctx = ReportContext::new(&session);
        let output = MarkdownReporter::new().render(&ctx).expect("renders");

        assert!(output.contains("# Institute"));
        assert!(output.contains("| STUDENT | Learner |"));
        assert!(output.contains("| dashboard | ✓ |"));
        assert!(output.contains("No institute-level tab adjustments."));
        assert!(!output.contains("{{"));
    }

    #[test]
    fn test_matrix_section_covers_every_role() {
        let session = default_session();
        let ctx = ReportContext::new(&session);
        let output = MarkdownReporter::new().render(&ctx).expect("renders");

        for role in RoleKey::ALL {
            assert!(output.contains(&format!("### {role}")));
        }
        assert!(output.contains("session ✗"));
    }
}
