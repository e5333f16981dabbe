//! Persisted institute settings
//!
//! One TOML file per deployment holds everything an institute admin can
//! adjust: the institute name, the naming overrides and the tab settings.
//! Reads never fail: a missing or malformed file resolves to empty
//! settings (defaults apply everywhere) with a warning at the read
//! boundary. Saves rewrite the whole file, last writer wins.

use crate::core::config::Config;
use crate::core::terminology::TerminologySetting;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// One institute-level tab adjustment
///
/// Adjustments layer on top of the role matrix: they can hide a tab from
/// everyone or reorder the tab strip, but they never grant access a role's
/// table denies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabSetting {
    /// Tab identifier, matching the ids in the access tables
    pub id: String,
    /// Whether the tab shows at all for this institute
    #[serde(default = "default_visible")]
    pub visible: bool,
    /// Position in the tab strip (lower comes first)
    #[serde(default)]
    pub order: u32,
}

const fn default_visible() -> bool {
    true
}

impl TabSetting {
    /// Create a visible tab setting at the given position
    #[must_use]
    pub fn new(id: String, order: u32) -> Self {
        Self {
            id,
            visible: true,
            order,
        }
    }
}

/// The full contents of an institute settings file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsFile {
    /// Institute display name
    #[serde(default)]
    pub institute: String,

    /// Naming overrides, ordered as saved
    #[serde(default)]
    pub naming: Vec<TerminologySetting>,

    /// Tab adjustments, ordered as saved
    #[serde(default)]
    pub tabs: Vec<TabSetting>,
}

impl SettingsFile {
    /// Find the naming record for a key, if present
    #[must_use]
    pub fn naming_record(&self, key: &str) -> Option<&TerminologySetting> {
        self.naming.iter().find(|setting| setting.key == key)
    }

    /// Insert or replace the naming record for a key
    ///
    /// Keys stay unique within the list; replacing keeps the record's
    /// original position so saved files diff cleanly.
    pub fn upsert_naming(&mut self, setting: TerminologySetting) {
        match self.naming.iter_mut().find(|s| s.key == setting.key) {
            Some(existing) => *existing = setting,
            None => self.naming.push(setting),
        }
    }

    /// Remove the naming record for a key
    ///
    /// # Returns
    /// `true` when a record was removed
    pub fn remove_naming(&mut self, key: &str) -> bool {
        let before = self.naming.len();
        self.naming.retain(|setting| setting.key != key);
        self.naming.len() != before
    }

    /// Find the tab setting for an id, if present
    #[must_use]
    pub fn tab_setting(&self, id: &str) -> Option<&TabSetting> {
        self.tabs.iter().find(|tab| tab.id == id)
    }

    /// Insert or replace the tab setting for an id
    pub fn upsert_tab(&mut self, setting: TabSetting) {
        match self.tabs.iter_mut().find(|t| t.id == setting.id) {
            Some(existing) => *existing = setting,
            None => self.tabs.push(setting),
        }
    }

    /// Remove the tab setting for an id
    ///
    /// # Returns
    /// `true` when a setting was removed
    pub fn remove_tab(&mut self, id: &str) -> bool {
        let before = self.tabs.len();
        self.tabs.retain(|tab| tab.id != id);
        self.tabs.len() != before
    }
}

/// Handle to the persisted settings file
#[derive(Debug, Clone)]
pub struct SettingsStorage {
    path: PathBuf,
}

impl SettingsStorage {
    /// Create a storage handle for an explicit file path
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create a storage handle from the tool configuration
    ///
    /// Uses `paths.settings_file`; an empty config value falls back to
    /// `institute.toml` inside the EduGate config directory.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let path = if config.paths.settings_file.is_empty() {
            Config::get_edugate_dir().join("institute.toml")
        } else {
            PathBuf::from(&config.paths.settings_file)
        };
        Self::new(path)
    }

    /// The file path this handle reads and writes
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the settings file
    ///
    /// Never fails: a missing file yields empty settings silently, an
    /// unreadable or malformed file yields empty settings with a warning.
    /// Resolvers downstream treat empty settings as "defaults everywhere".
    #[must_use]
    pub fn load(&self) -> SettingsFile {
        if !self.path.exists() {
            return SettingsFile::default();
        }

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                logger::warn!(
                    "Could not read settings file {}: {e}; using defaults",
                    self.path.display()
                );
                return SettingsFile::default();
            }
        };

        match toml::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                logger::warn!(
                    "Malformed settings file {}: {e}; using defaults",
                    self.path.display()
                );
                SettingsFile::default()
            }
        }
    }

    /// Save the settings file
    ///
    /// Rewrites the whole file; there is no record-level merge. Creates the
    /// parent directory when needed.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails, the directory cannot be
    /// created, or the file cannot be written.
    pub fn save(&self, settings: &SettingsFile) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(settings)?;
        fs::write(&self.path, toml_str)?;
        logger::debug!("Settings saved to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_loads_empty() {
        let storage = SettingsStorage::new(PathBuf::from("/nonexistent/institute.toml"));
        let settings = storage.load();
        assert!(settings.naming.is_empty());
        assert!(settings.tabs.is_empty());
        assert!(settings.institute.is_empty());
    }

    #[test]
    fn test_upsert_naming_replaces_in_place() {
        let mut settings = SettingsFile::default();
        settings.upsert_naming(TerminologySetting::new(
            "Course".to_string(),
            "Program".to_string(),
        ));
        settings.upsert_naming(TerminologySetting::new(
            "Batch".to_string(),
            "Cohort".to_string(),
        ));
        settings.upsert_naming(TerminologySetting::new(
            "Course".to_string(),
            "Pathway".to_string(),
        ));

        assert_eq!(settings.naming.len(), 2);
        assert_eq!(settings.naming[0].key, "Course");
        assert_eq!(settings.naming[0].custom_value, "Pathway");
    }

    #[test]
    fn test_remove_naming() {
        let mut settings = SettingsFile::default();
        settings.upsert_naming(TerminologySetting::new(
            "Course".to_string(),
            "Program".to_string(),
        ));
        assert!(settings.remove_naming("Course"));
        assert!(!settings.remove_naming("Course"));
        assert!(settings.naming.is_empty());
    }

    #[test]
    fn test_tab_settings_round_trip_through_toml() {
        let mut settings = SettingsFile {
            institute: "Northside Academy".to_string(),
            ..Default::default()
        };
        settings.upsert_tab(TabSetting::new("studyLibrary".to_string(), 1));
        settings.upsert_tab(TabSetting {
            id: "communityCentre".to_string(),
            visible: false,
            order: 9,
        });

        let toml_str = toml::to_string_pretty(&settings).expect("serializes");
        let parsed: SettingsFile = toml::from_str(&toml_str).expect("parses");
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_tab_visible_defaults_to_true() {
        let parsed: SettingsFile = toml::from_str(
            r#"
            [[tabs]]
            id = "dashboard"
            order = 2
            "#,
        )
        .expect("parses");
        assert!(parsed.tabs[0].visible);
        assert_eq!(parsed.tabs[0].order, 2);
    }
}
