//! Access and terminology report generation
//!
//! Renders what an institute's deployment actually resolves to: the
//! effective terminology table, the display name per role, the tab
//! adjustments and the full access matrix. Available in Markdown and HTML.

pub mod formats;

use crate::core::roles::RoleKey;
use crate::core::session::InstituteSession;
use crate::core::terminology::{RoleTerm, SystemTerm, TermKey};
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// One row of the effective-terminology table
#[derive(Debug, Clone)]
pub struct TerminologyRow {
    /// Canonical key
    pub key: String,
    /// Label the key resolves to right now
    pub effective: String,
    /// Whether an institute override is active
    pub overridden: bool,
}

/// Data context for report generation
///
/// Wraps the session so every format renders from the same resolved state.
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    /// Session to report on
    pub session: &'a InstituteSession,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(session: &'a InstituteSession) -> Self {
        Self { session }
    }

    /// Institute display name, with a generic fallback when unset
    #[must_use]
    pub fn institute_label(&self) -> &str {
        let name = self.session.institute_name();
        if name.is_empty() {
            "Institute"
        } else {
            name
        }
    }

    /// Rows for the terminology table
    ///
    /// All system terms first, then the two role terms, then any
    /// institute-defined custom keys sorted alphabetically.
    #[must_use]
    pub fn terminology_rows(&self) -> Vec<TerminologyRow> {
        let store = self.session.terminology();
        let mut rows = Vec::new();

        for term in SystemTerm::ALL {
            rows.push(TerminologyRow {
                key: term.key().to_string(),
                effective: store.resolve(term.key(), term.key()).to_string(),
                overridden: store.override_for(term.key()).is_some(),
            });
        }

        for term in RoleTerm::ALL {
            rows.push(TerminologyRow {
                key: term.key().to_string(),
                effective: store.resolve(term.key(), term.key()).to_string(),
                overridden: store.override_for(term.key()).is_some(),
            });
        }

        let mut custom: Vec<&str> = store
            .records()
            .filter(|record| matches!(TermKey::parse(&record.key), TermKey::Custom(_)))
            .map(|record| record.key.as_str())
            .collect();
        custom.sort_unstable();

        for key in custom {
            rows.push(TerminologyRow {
                key: key.to_string(),
                effective: store.resolve(key, key).to_string(),
                overridden: store.override_for(key).is_some(),
            });
        }

        rows
    }

    /// `(backend string, display label)` for every known role
    #[must_use]
    pub fn role_rows(&self) -> Vec<(&'static str, String)> {
        RoleKey::ALL
            .iter()
            .map(|role| {
                (
                    role.as_str(),
                    self.session.map_role_to_custom_name(role.as_str()),
                )
            })
            .collect()
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}
