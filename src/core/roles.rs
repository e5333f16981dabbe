//! Backend roles and the role display resolver
//!
//! Roles arrive from the session token as fixed uppercase strings. This
//! module maps them to terminology keys so the label an institute sees
//! ("Learner", or whatever they renamed it to) is resolved through the
//! same override store as every other term.

use crate::core::terminology::{RoleTerm, SystemTerm, TermKey, TerminologyStore};
use std::fmt;

/// The closed set of backend role identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleKey {
    /// Institute administrator
    Admin,
    /// Teaching staff
    Teacher,
    /// Course/study-library author
    CourseCreator,
    /// Assessment author
    AssessmentCreator,
    /// Submission evaluator
    Evaluator,
    /// Enrolled student
    Student,
}

impl RoleKey {
    /// All known roles, in privilege order
    pub const ALL: [Self; 6] = [
        Self::Admin,
        Self::Teacher,
        Self::CourseCreator,
        Self::AssessmentCreator,
        Self::Evaluator,
        Self::Student,
    ];

    /// The exact backend identifier string for this role
    ///
    /// The two creator roles are multi-word on the wire; everything else is
    /// a single word.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Teacher => "TEACHER",
            Self::CourseCreator => "COURSE CREATOR",
            Self::AssessmentCreator => "ASSESSMENT CREATOR",
            Self::Evaluator => "EVALUATOR",
            Self::Student => "STUDENT",
        }
    }

    /// Parse a backend role string
    ///
    /// Exact-match only; no trimming, no case folding. Anything outside the
    /// closed set returns `None` rather than an error, so callers can apply
    /// their own fallback policy (passthrough for display, deny for access).
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|role| role.as_str() == raw)
    }

    /// The terminology key this role's display label resolves through
    ///
    /// Single-word roles use generic system terms; the two multi-word
    /// creator roles route through the separate role-term namespace. The
    /// namespaces stay distinct: renaming "Course" does not rename
    /// "CourseCreator".
    #[must_use]
    pub const fn term_key(self) -> TermKey {
        match self {
            Self::Admin => TermKey::System(SystemTerm::Admin),
            Self::Teacher => TermKey::System(SystemTerm::Teacher),
            Self::CourseCreator => TermKey::Role(RoleTerm::CourseCreator),
            Self::AssessmentCreator => TermKey::Role(RoleTerm::AssessmentCreator),
            Self::Evaluator => TermKey::System(SystemTerm::Evaluator),
            Self::Student => TermKey::System(SystemTerm::Learner),
        }
    }
}

impl fmt::Display for RoleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolve a backend role string to its human-facing label
///
/// Known roles resolve through the terminology store with their canonical
/// term as both key and default, so an institute override replaces the
/// generic label and its absence yields the generic term. Unknown role
/// strings pass through unchanged; a role introduced server-side before
/// this code knows about it still renders as something.
///
/// # Arguments
/// * `raw` - Role string as received from the backend/session token
/// * `store` - Current terminology snapshot
#[must_use]
pub fn map_role_to_custom_name(raw: &str, store: &TerminologyStore) -> String {
    match RoleKey::parse(raw) {
        Some(role) => {
            let key = role.term_key();
            store.resolve_key(&key).to_string()
        }
        None => raw.to_string(),
    }
}
