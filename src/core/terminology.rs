//! Canonical terminology and institute naming overrides
//!
//! Every concept the platform surfaces (Course, Batch, Learner, ...) has a
//! canonical system term. Institutes can rename terms ("Course" → "Program");
//! the [`TerminologyStore`] holds those overrides and resolves a key to the
//! override when one exists, or to the caller-supplied default otherwise.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Canonical system terms, the closed set of renameable concepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemTerm {
    /// A course in the study library
    Course,
    /// A level/grade grouping of students
    Level,
    /// An academic session (e.g. 2025-26)
    Session,
    /// A taught subject
    Subject,
    /// A chapter within a course
    Chapter,
    /// A single slide in a presentation
    Slide,
    /// A batch of enrolled students
    Batch,
    /// An assessment/exam
    Assessment,
    /// A scheduled live session
    LiveSession,
    /// A student (displayed role term)
    Learner,
    /// A teacher (displayed role term)
    Teacher,
    /// An administrator (displayed role term)
    Admin,
    /// An evaluator (displayed role term)
    Evaluator,
    /// The institute itself
    Institute,
}

impl SystemTerm {
    /// All canonical system terms, in display order
    pub const ALL: [Self; 14] = [
        Self::Course,
        Self::Level,
        Self::Session,
        Self::Subject,
        Self::Chapter,
        Self::Slide,
        Self::Batch,
        Self::Assessment,
        Self::LiveSession,
        Self::Learner,
        Self::Teacher,
        Self::Admin,
        Self::Evaluator,
        Self::Institute,
    ];

    /// Canonical string form of the term
    ///
    /// This string is both the lookup key in the terminology store and the
    /// default label shown when no override exists.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Course => "Course",
            Self::Level => "Level",
            Self::Session => "Session",
            Self::Subject => "Subject",
            Self::Chapter => "Chapter",
            Self::Slide => "Slide",
            Self::Batch => "Batch",
            Self::Assessment => "Assessment",
            Self::LiveSession => "LiveSession",
            Self::Learner => "Learner",
            Self::Teacher => "Teacher",
            Self::Admin => "Admin",
            Self::Evaluator => "Evaluator",
            Self::Institute => "Institute",
        }
    }

    /// Parse a canonical string form back into a term
    ///
    /// Exact-match and case-sensitive, like every terminology lookup.
    ///
    /// # Returns
    /// The matching term, or `None` for anything outside the closed set
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|term| term.key() == raw)
    }
}

impl fmt::Display for SystemTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Role-specific terminology keys for the two multi-word creator roles
///
/// These live in a namespace separate from [`SystemTerm`]: an override
/// registered for `CourseCreator` never affects `Course` and vice versa.
/// The split mirrors how institutes actually rename these roles
/// independently of the underlying concept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleTerm {
    /// The COURSE CREATOR role
    CourseCreator,
    /// The ASSESSMENT CREATOR role
    AssessmentCreator,
}

impl RoleTerm {
    /// Both role terms, in display order
    pub const ALL: [Self; 2] = [Self::CourseCreator, Self::AssessmentCreator];

    /// Canonical string form of the role term
    ///
    /// Doubles as the lookup key and the default label, like
    /// [`SystemTerm::key`].
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::CourseCreator => "CourseCreator",
            Self::AssessmentCreator => "AssessmentCreator",
        }
    }

    /// Parse a canonical string form back into a role term
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|term| term.key() == raw)
    }
}

impl fmt::Display for RoleTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// A terminology lookup key
///
/// Known keys get a typed variant; institute-defined keys outside the closed
/// sets fall through to `Custom`. All three variants resolve the same way,
/// the typing only buys compile-time checking where the key is known.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TermKey {
    /// A canonical system term
    System(SystemTerm),
    /// A creator-role terminology key
    Role(RoleTerm),
    /// An institute-defined key outside the closed sets
    Custom(String),
}

impl TermKey {
    /// Classify a raw key string
    ///
    /// Tries the system-term set first, then the role-term set, and falls
    /// back to `Custom` for everything else. Never fails.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if let Some(term) = SystemTerm::parse(raw) {
            Self::System(term)
        } else if let Some(term) = RoleTerm::parse(raw) {
            Self::Role(term)
        } else {
            Self::Custom(raw.to_string())
        }
    }

    /// The key's string form, as used for store lookups
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::System(term) => term.key(),
            Self::Role(term) => term.key(),
            Self::Custom(raw) => raw,
        }
    }
}

impl fmt::Display for TermKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One renamed term, as persisted in the institute settings file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminologySetting {
    /// Canonical key being renamed (e.g. "Course")
    pub key: String,

    /// The system default label at the time the override was saved, kept for
    /// display in settings UIs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_value: Option<String>,

    /// The institute's replacement label; an empty string never overrides
    #[serde(default)]
    pub custom_value: String,
}

impl TerminologySetting {
    /// Create a new override record
    ///
    /// # Arguments
    /// * `key` - Canonical key being renamed
    /// * `custom_value` - Replacement label
    #[must_use]
    pub fn new(key: String, custom_value: String) -> Self {
        Self {
            key,
            system_value: None,
            custom_value,
        }
    }

    /// Whether this record actually overrides anything
    ///
    /// Records with an empty `custom_value` are kept in the persisted list
    /// (they remember the admin touched the key) but resolve to the default.
    #[must_use]
    pub fn overrides(&self) -> bool {
        !self.custom_value.is_empty()
    }
}

/// In-memory snapshot of an institute's naming overrides
///
/// Built once from the persisted settings list and read by every resolver
/// call. Lookups are pure; the snapshot is replaced wholesale when settings
/// change, never patched in place.
#[derive(Debug, Clone, Default)]
pub struct TerminologyStore {
    settings: HashMap<String, TerminologySetting>,
}

impl TerminologyStore {
    /// Create an empty store (every lookup falls back to its default)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a persisted settings list
    ///
    /// Keys are unique in a well-formed list; if duplicates occur anyway,
    /// the last record wins.
    #[must_use]
    pub fn from_settings(settings: Vec<TerminologySetting>) -> Self {
        let mut store = Self::new();
        for setting in settings {
            store.insert(setting);
        }
        store
    }

    /// Insert or replace one override record
    pub fn insert(&mut self, setting: TerminologySetting) {
        self.settings.insert(setting.key.clone(), setting);
    }

    /// Number of records in the store (including non-overriding ones)
    #[must_use]
    pub fn len(&self) -> usize {
        self.settings.len()
    }

    /// Whether the store has no records at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    /// Get the active override for a key, if any
    ///
    /// # Returns
    /// The custom label when a record exists and its `custom_value` is
    /// non-empty, `None` otherwise
    #[must_use]
    pub fn override_for(&self, key: &str) -> Option<&str> {
        self.settings
            .get(key)
            .filter(|setting| setting.overrides())
            .map(|setting| setting.custom_value.as_str())
    }

    /// Resolve a key to its display label
    ///
    /// Case-sensitive exact-match lookup. A missing record or an empty
    /// override degrades to `default`; this never fails.
    ///
    /// # Arguments
    /// * `key` - Canonical key to look up
    /// * `default` - Label to return when no override exists
    #[must_use]
    pub fn resolve<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.override_for(key).unwrap_or(default)
    }

    /// Resolve a typed key, using its canonical form as the default
    ///
    /// This is the role-display path: the canonical term serves as both
    /// lookup key and fallback label.
    #[must_use]
    pub fn resolve_key<'a>(&'a self, key: &'a TermKey) -> &'a str {
        self.resolve(key.as_str(), key.as_str())
    }

    /// Iterate over all records in the store (unordered)
    pub fn records(&self) -> impl Iterator<Item = &TerminologySetting> {
        self.settings.values()
    }
}
