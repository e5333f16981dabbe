//! Institute session context
//!
//! [`InstituteSession`] is the one object UI-facing callers hold: it owns
//! the settings storage handle, the static access matrix and a lazily
//! loaded snapshot of the institute's overrides. The snapshot loads on the
//! first resolver call and is replaced in a single assignment by
//! [`refresh`](InstituteSession::refresh) after a settings save; readers
//! see either the old or the new snapshot in full, never a partial one.
//!
//! Everything here is single-threaded by design, matching the UI event
//! loop this layer serves.

use crate::core::access::AccessMatrix;
use crate::core::config::Config;
use crate::core::roles::{map_role_to_custom_name, RoleKey};
use crate::core::settings::{SettingsStorage, TabSetting};
use crate::core::terminology::TerminologyStore;
use std::cell::OnceCell;

/// Fully resolved institute state, built from one settings read
#[derive(Debug, Clone)]
struct Snapshot {
    institute: String,
    store: TerminologyStore,
    tabs: Vec<TabSetting>,
}

/// Session-scoped resolution context
#[derive(Debug)]
pub struct InstituteSession {
    storage: SettingsStorage,
    matrix: AccessMatrix,
    snapshot: OnceCell<Snapshot>,
}

impl InstituteSession {
    /// Create a session over an explicit storage handle
    ///
    /// Nothing is read yet; the snapshot loads on first use.
    #[must_use]
    pub fn new(storage: SettingsStorage) -> Self {
        Self {
            storage,
            matrix: AccessMatrix::new(),
            snapshot: OnceCell::new(),
        }
    }

    /// Create a session from the tool configuration
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(SettingsStorage::from_config(config))
    }

    /// The storage handle this session reads from
    #[must_use]
    pub fn storage(&self) -> &SettingsStorage {
        &self.storage
    }

    /// The static access matrix
    #[must_use]
    pub fn matrix(&self) -> &AccessMatrix {
        &self.matrix
    }

    /// Whether the settings snapshot has been loaded yet
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.snapshot.get().is_some()
    }

    fn build_snapshot(storage: &SettingsStorage) -> Snapshot {
        let file = storage.load();
        Snapshot {
            institute: file.institute,
            store: TerminologyStore::from_settings(file.naming),
            tabs: file.tabs,
        }
    }

    fn snapshot(&self) -> &Snapshot {
        self.snapshot
            .get_or_init(|| Self::build_snapshot(&self.storage))
    }

    /// Reload the snapshot from storage
    ///
    /// Call after a settings save so subsequent resolver calls observe the
    /// new state. The replacement is one assignment; no partial state is
    /// ever visible.
    pub fn refresh(&mut self) {
        let snapshot = Self::build_snapshot(&self.storage);
        self.snapshot = OnceCell::from(snapshot);
    }

    /// The institute display name, empty when none is configured
    #[must_use]
    pub fn institute_name(&self) -> &str {
        &self.snapshot().institute
    }

    /// The current terminology snapshot
    #[must_use]
    pub fn terminology(&self) -> &TerminologyStore {
        &self.snapshot().store
    }

    /// The institute's tab adjustments, ordered as saved
    #[must_use]
    pub fn tab_settings(&self) -> &[TabSetting] {
        &self.snapshot().tabs
    }

    /// Resolve a terminology key to its display label
    ///
    /// Returns the institute override when one exists, `default` otherwise.
    /// Never fails; loads the snapshot on first call.
    #[must_use]
    pub fn get_terminology(&self, key: &str, default: &str) -> String {
        self.snapshot().store.resolve(key, default).to_string()
    }

    /// Resolve a backend role string to its display label
    ///
    /// Unknown roles pass through unchanged.
    #[must_use]
    pub fn map_role_to_custom_name(&self, raw: &str) -> String {
        map_role_to_custom_name(raw, &self.snapshot().store)
    }

    /// Can `role` open top-level tab `tab`?
    ///
    /// Takes the raw backend role string; unknown roles are denied.
    #[must_use]
    pub fn has_tab_access(&self, role: &str, tab: &str) -> bool {
        self.matrix.has_tab_access_str(role, tab)
    }

    /// Can `role` see child tab `child` under `tab`?
    #[must_use]
    pub fn has_child_tab_access(&self, role: &str, tab: &str, child: &str) -> bool {
        self.matrix.has_child_tab_access_str(role, tab, child)
    }

    /// Can `role` use feature `feature` within `tab`?
    #[must_use]
    pub fn has_feature_access(&self, role: &str, tab: &str, feature: &str) -> bool {
        self.matrix.has_feature_access_str(role, tab, feature)
    }

    /// The tab strip a role actually sees
    ///
    /// Starts from the tabs the role's table grants, then applies the
    /// institute's adjustments: hidden tabs drop out, tabs with a saved
    /// position come first in that order, untouched tabs follow in their
    /// built-in order. Adjustments never add tabs the role cannot open.
    #[must_use]
    pub fn visible_tabs(&self, role: RoleKey) -> Vec<&'static str> {
        let granted = self.matrix.granted_tabs(role);
        apply_tab_settings(&granted, &self.snapshot().tabs)
    }
}

/// Layer institute tab adjustments over a role's granted tabs
fn apply_tab_settings(granted: &[&'static str], settings: &[TabSetting]) -> Vec<&'static str> {
    let mut keyed: Vec<((u8, u32), &'static str)> = Vec::with_capacity(granted.len());

    for tab in granted.iter().copied() {
        match settings.iter().find(|setting| setting.id == tab) {
            Some(setting) if !setting.visible => {}
            Some(setting) => keyed.push(((0, setting.order), tab)),
            None => keyed.push(((1, 0), tab)),
        }
    }

    // Stable sort keeps declaration order within each group
    keyed.sort_by_key(|(key, _)| *key);
    keyed.into_iter().map(|(_, tab)| tab).collect()
}
