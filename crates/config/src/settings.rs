// Application settings
// Loaded from ~/.config/fjordviz/settings.json

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// What happens to a module's settings when its data source changes
/// underneath it and the current selection is no longer listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FixupStyle {
    /// Silently repair invalid selections to the nearest listed value
    #[default]
    Auto,
    /// Keep the invalid selection and flag the module as broken
    Manual,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    // Selection repair
    #[serde(rename = "settings.fixupStyle")]
    pub fixup_style: FixupStyle,

    // Snapshots
    #[serde(rename = "snapshot.autosaveInterval")]
    pub snapshot_autosave_interval: Option<u32>, // seconds, None = disabled

    #[serde(rename = "snapshot.keepLimit")]
    pub snapshot_keep_limit: usize,

    // Queries
    #[serde(rename = "query.retryLimit")]
    pub query_retry_limit: u32,

    #[serde(rename = "query.staleAfterSeconds")]
    pub query_stale_after_seconds: u32,

    // Cross-module synchronization
    #[serde(rename = "sync.linkModulesByDefault")]
    pub link_modules_by_default: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            // Selection repair
            fixup_style: FixupStyle::Auto,
            // Snapshots
            snapshot_autosave_interval: None,
            snapshot_keep_limit: 20,
            // Queries
            query_retry_limit: 3,
            query_stale_after_seconds: 300,
            // Sync
            link_modules_by_default: false,
        }
    }
}

impl AppSettings {
    /// Get the settings file path
    pub fn config_path() -> PathBuf {
        crate::config_dir().join("settings.json")
    }

    /// Load settings from disk, falling back to defaults
    pub fn load() -> Self {
        let path = Self::config_path();

        if !path.exists() {
            let settings = Self::default();
            settings.create_default_file();
            return settings;
        }

        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&Self::strip_comments(&contents)) {
                Ok(settings) => settings,
                Err(e) => {
                    eprintln!("Error parsing settings.json: {}", e);
                    eprintln!("Using default settings");
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("Error reading settings.json: {}", e);
                Self::default()
            }
        }
    }

    /// Save current settings to disk
    pub fn save(&self) -> Result<(), String> {
        let path = Self::config_path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;

        fs::write(&path, json).map_err(|e| e.to_string())
    }

    // Lines starting with // are allowed in the settings file
    fn strip_comments(contents: &str) -> String {
        contents
            .lines()
            .filter(|line| !line.trim().starts_with("//"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Create default settings file with comments
    fn create_default_file(&self) {
        let path = Self::config_path();

        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                eprintln!("Error creating config directory: {}", e);
                return;
            }
        }

        let default_config = r#"{
    // Selection repair ("auto" = repair invalid selections, "manual" = flag them)
    "settings.fixupStyle": "auto",

    // Snapshots
    "snapshot.autosaveInterval": null,
    "snapshot.keepLimit": 20,

    // Queries
    "query.retryLimit": 3,
    "query.staleAfterSeconds": 300,

    // Cross-module synchronization
    "sync.linkModulesByDefault": false
}
"#;

        if let Err(e) = fs::write(&path, default_config) {
            eprintln!("Error writing default settings.json: {}", e);
        }
    }

    /// Get the config file path for display/opening
    pub fn config_path_display() -> String {
        Self::config_path().to_string_lossy().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_sane() {
        let settings = AppSettings::default();
        assert_eq!(settings.fixup_style, FixupStyle::Auto);
        assert_eq!(settings.snapshot_keep_limit, 20);
        assert!(!settings.link_modules_by_default);
    }

    #[test]
    fn test_comment_lines_are_stripped() {
        let raw = "{\n// note\n\"snapshot.keepLimit\": 5\n}";
        let settings: AppSettings =
            serde_json::from_str(&AppSettings::strip_comments(raw)).unwrap();
        assert_eq!(settings.snapshot_keep_limit, 5);
    }

    #[test]
    fn test_unknown_and_missing_keys_fall_back() {
        let settings: AppSettings =
            serde_json::from_str("{\"query.retryLimit\": 7}").unwrap();
        assert_eq!(settings.query_retry_limit, 7);
        assert_eq!(settings.query_stale_after_seconds, 300);
    }

    #[test]
    fn test_round_trip_preserves_dotted_keys() {
        let settings = AppSettings::default();
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("settings.fixupStyle"));
        let back: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.snapshot_keep_limit, settings.snapshot_keep_limit);
    }
}
