//! Role access matrix and predicates
//!
//! Answers "can role R see tab T / child C / feature F" from a matrix built
//! once from the declarative tables in [`defaults`]. Every predicate is a
//! total function over arbitrary string input: an unknown role, tab, child
//! or feature is denied, never an error.

mod defaults;

use crate::core::roles::RoleKey;
use std::collections::HashMap;

/// Access granted to one role for one tab
#[derive(Debug, Clone)]
pub struct TabGrant {
    /// Tab identifier
    pub id: &'static str,
    /// Whether the tab itself is accessible
    pub access: bool,
    children: Vec<(&'static str, bool)>,
    features: Vec<(&'static str, bool)>,
}

impl TabGrant {
    /// Look up a child tab flag
    ///
    /// # Returns
    /// The flag when the child is listed, `None` for unknown children
    #[must_use]
    pub fn child(&self, id: &str) -> Option<bool> {
        self.children
            .iter()
            .find(|(child_id, _)| *child_id == id)
            .map(|(_, flag)| *flag)
    }

    /// Look up a feature flag
    ///
    /// # Returns
    /// The flag when the feature is listed, `None` for unknown features
    #[must_use]
    pub fn feature(&self, id: &str) -> Option<bool> {
        self.features
            .iter()
            .find(|(feature_id, _)| *feature_id == id)
            .map(|(_, flag)| *flag)
    }

    /// Child tab flags in declaration order
    pub fn children(&self) -> impl Iterator<Item = (&'static str, bool)> + '_ {
        self.children.iter().copied()
    }

    /// Feature flags in declaration order
    pub fn features(&self) -> impl Iterator<Item = (&'static str, bool)> + '_ {
        self.features.iter().copied()
    }
}

/// The per-role access matrix
///
/// Constructed once from the built-in tables and read-only afterwards.
/// Lookups never allocate and never fail; any miss at any level resolves
/// to "no access".
#[derive(Debug, Clone)]
pub struct AccessMatrix {
    roles: HashMap<RoleKey, Vec<TabGrant>>,
}

impl AccessMatrix {
    /// Build the matrix from the built-in role tables
    #[must_use]
    pub fn new() -> Self {
        let mut roles = HashMap::new();

        for role_defaults in defaults::ROLE_DEFAULTS {
            let grants = role_defaults
                .tabs
                .iter()
                .map(|tab| TabGrant {
                    id: tab.id,
                    access: tab.access,
                    children: tab.children.to_vec(),
                    features: tab.features.to_vec(),
                })
                .collect();
            roles.insert(role_defaults.role, grants);
        }

        Self { roles }
    }

    /// All tab grants for a role, in display order
    ///
    /// # Returns
    /// An empty slice for roles without a table (cannot happen for the
    /// closed role set, but lookups stay total)
    #[must_use]
    pub fn grants(&self, role: RoleKey) -> &[TabGrant] {
        self.roles.get(&role).map_or(&[], Vec::as_slice)
    }

    fn grant(&self, role: RoleKey, tab: &str) -> Option<&TabGrant> {
        self.grants(role).iter().find(|grant| grant.id == tab)
    }

    /// Can `role` open top-level tab `tab`?
    ///
    /// Unknown tabs are denied.
    #[must_use]
    pub fn has_tab_access(&self, role: RoleKey, tab: &str) -> bool {
        self.grant(role, tab).is_some_and(|grant| grant.access)
    }

    /// Can `role` see child tab `child` under `tab`?
    ///
    /// Pure two-level lookup: the parent tab's own access flag is not
    /// consulted, and there is no walk below the child level. Unknown tab
    /// or child is denied.
    #[must_use]
    pub fn has_child_tab_access(&self, role: RoleKey, tab: &str, child: &str) -> bool {
        self.grant(role, tab)
            .and_then(|grant| grant.child(child))
            .unwrap_or(false)
    }

    /// Can `role` use feature `feature` within `tab`?
    ///
    /// Unknown tab or feature is denied.
    #[must_use]
    pub fn has_feature_access(&self, role: RoleKey, tab: &str, feature: &str) -> bool {
        self.grant(role, tab)
            .and_then(|grant| grant.feature(feature))
            .unwrap_or(false)
    }

    /// String-facing variant of [`has_tab_access`](Self::has_tab_access)
    ///
    /// Accepts the raw backend role string; unknown role strings are
    /// denied, keeping the predicate total over any input.
    #[must_use]
    pub fn has_tab_access_str(&self, role: &str, tab: &str) -> bool {
        RoleKey::parse(role).is_some_and(|role| self.has_tab_access(role, tab))
    }

    /// String-facing variant of [`has_child_tab_access`](Self::has_child_tab_access)
    #[must_use]
    pub fn has_child_tab_access_str(&self, role: &str, tab: &str, child: &str) -> bool {
        RoleKey::parse(role).is_some_and(|role| self.has_child_tab_access(role, tab, child))
    }

    /// String-facing variant of [`has_feature_access`](Self::has_feature_access)
    #[must_use]
    pub fn has_feature_access_str(&self, role: &str, tab: &str, feature: &str) -> bool {
        RoleKey::parse(role).is_some_and(|role| self.has_feature_access(role, tab, feature))
    }

    /// Ids of the tabs `role` can open, in display order
    #[must_use]
    pub fn granted_tabs(&self, role: RoleKey) -> Vec<&'static str> {
        self.grants(role)
            .iter()
            .filter(|grant| grant.access)
            .map(|grant| grant.id)
            .collect()
    }
}

impl Default for AccessMatrix {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teacher_dashboard_granted() {
        let matrix = AccessMatrix::new();
        assert!(matrix.has_tab_access(RoleKey::Teacher, "dashboard"));
        assert!(!matrix.has_tab_access(RoleKey::Teacher, "nonexistentTab"));
    }

    #[test]
    fn test_teacher_manage_institute_children() {
        let matrix = AccessMatrix::new();
        assert!(matrix.has_child_tab_access(RoleKey::Teacher, "manageInstitute", "batches"));
        assert!(!matrix.has_child_tab_access(RoleKey::Teacher, "manageInstitute", "session"));
        assert!(matrix.has_child_tab_access(RoleKey::Teacher, "manageInstitute", "levels"));
    }

    #[test]
    fn test_deny_by_default_on_every_level() {
        let matrix = AccessMatrix::new();
        // Tab the role has no entry for
        assert!(!matrix.has_tab_access(RoleKey::Student, "manageInstitute"));
        // Unknown child under a granted tab
        assert!(!matrix.has_child_tab_access(RoleKey::Teacher, "manageInstitute", "payroll"));
        // Unknown feature under a granted tab
        assert!(!matrix.has_feature_access(RoleKey::Teacher, "dashboard", "export"));
        // Child lookup under an unknown tab
        assert!(!matrix.has_child_tab_access(RoleKey::Teacher, "payroll", "anything"));
    }

    #[test]
    fn test_unknown_role_string_denied() {
        let matrix = AccessMatrix::new();
        assert!(!matrix.has_tab_access_str("SUPERADMIN", "dashboard"));
        assert!(!matrix.has_tab_access_str("teacher", "dashboard"));
        assert!(matrix.has_tab_access_str("TEACHER", "dashboard"));
        assert!(!matrix.has_child_tab_access_str("", "manageInstitute", "batches"));
        assert!(!matrix.has_feature_access_str("GHOST", "students", "bulkUpload"));
    }

    #[test]
    fn test_admin_sees_everything_listed() {
        let matrix = AccessMatrix::new();
        for grant in matrix.grants(RoleKey::Admin) {
            assert!(grant.access, "admin tab '{}' should be granted", grant.id);
            for (child, flag) in grant.children() {
                assert!(flag, "admin child '{child}' should be granted");
            }
            for (feature, flag) in grant.features() {
                assert!(flag, "admin feature '{feature}' should be granted");
            }
        }
    }

    #[test]
    fn test_evaluator_scope() {
        let matrix = AccessMatrix::new();
        assert!(matrix.has_child_tab_access(RoleKey::Evaluator, "assessmentCenter", "evaluations"));
        assert!(matrix.has_feature_access(
            RoleKey::Evaluator,
            "assessmentCenter",
            "evaluateSubmissions"
        ));
        assert!(!matrix.has_feature_access(
            RoleKey::Evaluator,
            "assessmentCenter",
            "createAssessment"
        ));
        assert!(!matrix.has_tab_access(RoleKey::Evaluator, "studyLibrary"));
    }

    #[test]
    fn test_student_scope() {
        let matrix = AccessMatrix::new();
        assert!(matrix.has_child_tab_access(RoleKey::Student, "studyLibrary", "courses"));
        assert!(!matrix.has_child_tab_access(RoleKey::Student, "studyLibrary", "presentations"));
        assert!(!matrix.has_feature_access(RoleKey::Student, "studyLibrary", "createCourse"));
        assert!(matrix.has_child_tab_access(RoleKey::Student, "liveSessions", "schedule"));
        assert!(!matrix.has_child_tab_access(RoleKey::Student, "liveSessions", "attendance"));
    }

    #[test]
    fn test_child_lookup_ignores_parent_access_flag() {
        // Two-level lookup only: a listed child resolves from its own flag
        let matrix = AccessMatrix::new();
        let grant = matrix
            .grants(RoleKey::Teacher)
            .iter()
            .find(|g| g.id == "manageInstitute")
            .expect("teacher has a manageInstitute row");
        assert!(grant.access);
        assert_eq!(grant.child("session"), Some(false));
        assert_eq!(grant.child("unlisted"), None);
    }

    #[test]
    fn test_granted_tabs_in_declaration_order() {
        let matrix = AccessMatrix::new();
        let tabs = matrix.granted_tabs(RoleKey::Teacher);
        assert_eq!(
            tabs,
            vec![
                "dashboard",
                "manageInstitute",
                "students",
                "studyLibrary",
                "assessmentCenter",
                "liveSessions",
                "aiCenter",
            ]
        );
    }

    #[test]
    fn test_repeated_lookups_are_stable() {
        let matrix = AccessMatrix::new();
        let first = matrix.has_tab_access(RoleKey::Teacher, "dashboard");
        let second = matrix.has_tab_access(RoleKey::Teacher, "dashboard");
        assert_eq!(first, second);
    }
}
