//! HTML report generator
//!
//! Renders the access and terminology report as a single self-contained
//! HTML page with embedded CSS. Institute-provided strings are escaped
//! before insertion.

use crate::core::report::{ReportContext, ReportGenerator};
use crate::core::roles::RoleKey;
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded HTML report template
const HTML_TEMPLATE: &str = include_str!("../templates/report.html");

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = HTML_TEMPLATE.to_string();

        output = output.replace("{{institute}}", &escape(ctx.institute_label()));
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
        let mut html = String::new();

        html.push_str("<table>\n");
        html.push_str("<tr><th>Key</th><th>Effective label</th><th>Overridden</th></tr>\n");

        for row in ctx.terminology_rows() {
            let _ = writeln!(
                html,
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape(&row.key),
                escape(&row.effective),
                flag_cell(row.overridden)
            );
        }

        html.push_str("</table>\n");
        html
    }

    /// Generate the role display-name table
    fn generate_role_table(ctx: &ReportContext) -> String {
        let mut html = String::new();

        html.push_str("<table>\n");
        html.push_str("<tr><th>Backend role</th><th>Displayed as</th></tr>\n");

        for (role, label) in ctx.role_rows() {
            let _ = writeln!(
                html,
                "<tr><td>{role}</td><td>{}</td></tr>",
                escape(&label)
            );
        }

        html.push_str("</table>\n");
        html
    }

    /// Generate the institute tab-adjustments table
    fn generate_tab_adjustments(ctx: &ReportContext) -> String {
        let settings = ctx.session.tab_settings();
        if settings.is_empty() {
            return "<p class=\"muted\">No institute-level tab adjustments.</p>\n".to_string();
        }

        let mut html = String::new();
        html.push_str("<table>\n");
        html.push_str("<tr><th>Tab</th><th>Visible</th><th>Position</th></tr>\n");

        for setting in settings {
            let _ = writeln!(
                html,
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape(&setting.id),
                flag_cell(setting.visible),
                setting.order
            );
        }

        html.push_str("</table>\n");
        html
    }

    /// Generate the per-role access matrix section
    fn generate_access_matrix(ctx: &ReportContext) -> String {
        let mut html = String::new();

        for role in RoleKey::ALL {
            let label = ctx.session.map_role_to_custom_name(role.as_str());
            let _ = writeln!(html, "<h3>{role} (displays as \"{}\")</h3>", escape(&label));

            let visible = ctx.session.visible_tabs(role);
            if visible.is_empty() {
                html.push_str("<p class=\"muted\">No visible tabs.</p>\n");
            } else {
                let _ = writeln!(html, "<p>Visible tabs: {}</p>", visible.join(", "));
            }

            html.push_str("<table>\n");
            html.push_str(
                "<tr><th>Tab</th><th>Access</th><th>Children</th><th>Features</th></tr>\n",
            );

            for grant in ctx.session.matrix().grants(role) {
                let children = join_flags(grant.children());
                let features = join_flags(grant.features());
                let _ = writeln!(
                    html,
                    "<tr><td>{}</td><td>{}</td><td>{children}</td><td>{features}</td></tr>",
                    grant.id,
                    flag_cell(grant.access)
                );
            }

            html.push_str("</table>\n");
        }

        html
    }
}

/// Join `(id, flag)` pairs into one table cell
fn join_flags(flags: impl Iterator<Item = (&'static str, bool)>) -> String {
    let parts: Vec<String> = flags
        .map(|(id, flag)| format!("{id} {}", flag_cell(flag)))
        .collect();

    if parts.is_empty() {
        "-".to_string()
    } else {
        parts.join(", ")
    }
}

fn flag_cell(flag: bool) -> String {
    if flag {
        "<span class=\"granted\">\u{2713}</span>".to_string()
    } else {
        "<span class=\"denied\">\u{2717}</span>".to_string()
    }
}

/// Minimal HTML escaping for institute-provided strings
fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
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

    #[test]
    fn test_render_with_defaults() {
        let session = InstituteSession::new(SettingsStorage::new(PathBuf::from(
            "/nonexistent/edugate/institute.toml",
        )));
        let ctx = ReportContext::new(&session);
        let output = HtmlReporter::new().render(&ctx).expect("renders");

        assert!(output.starts_with("<!DOCTYPE html>"));
        assert!(output.contains("<td>STUDENT</td><td>Learner</td>"));
        assert!(output.contains("granted"));
        assert!(!output.contains("{{"));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a & b"), "a &amp; b");
        assert_eq!(escape("<script>"), "&lt;script&gt;");
        assert_eq!(escape("plain"), "plain");
    }
}
