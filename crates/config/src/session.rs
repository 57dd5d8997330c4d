use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

/// Current snapshot schema version. Bump when the on-disk shape changes.
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug)]
pub enum SessionError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Io(e) => write!(f, "snapshot I/O error: {}", e),
            SessionError::Parse(e) => write!(f, "snapshot parse error: {}", e),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<std::io::Error> for SessionError {
    fn from(e: std::io::Error) -> Self {
        SessionError::Io(e)
    }
}

impl From<serde_json::Error> for SessionError {
    fn from(e: serde_json::Error) -> Self {
        SessionError::Parse(e)
    }
}

/// A named snapshot of every module's serialized settings.
///
/// `modules` maps a module instance name to its flat setting record
/// (setting key to serialized value). Snapshots never store whether a
/// value was valid when saved; acceptance is re-judged on restore against
/// whatever data the session has then.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SessionSnapshot {
    pub version: u32,
    pub name: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub modules: BTreeMap<String, BTreeMap<String, String>>,
}

impl SessionSnapshot {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            version: SNAPSHOT_VERSION,
            name: name.into(),
            created_at: Some(now),
            updated_at: Some(now),
            modules: BTreeMap::new(),
        }
    }

    /// Default snapshot directory (`~/.config/fjordviz/snapshots`)
    pub fn snapshots_dir() -> PathBuf {
        crate::config_dir().join("snapshots")
    }

    /// Hash a snapshot name to create a stable filename
    fn hash_name(name: &str) -> String {
        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        format!("{:016x}", hasher.finish())
    }

    /// Snapshot file path within a directory
    pub fn path_in(dir: &Path, name: &str) -> PathBuf {
        dir.join(format!("{}.json", Self::hash_name(name)))
    }

    /// Store or overwrite the record for one module instance.
    pub fn set_module(&mut self, module: impl Into<String>, record: BTreeMap<String, String>) {
        self.modules.insert(module.into(), record);
        self.updated_at = Some(Utc::now());
    }

    /// The stored record for one module instance, if any.
    pub fn module(&self, module: &str) -> Option<&BTreeMap<String, String>> {
        self.modules.get(module)
    }

    /// Load a named snapshot from a directory.
    pub fn load_from(dir: &Path, name: &str) -> Result<Self, SessionError> {
        let contents = fs::read_to_string(Self::path_in(dir, name))?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Save this snapshot into a directory, creating it if needed.
    pub fn save_to(&self, dir: &Path) -> Result<(), SessionError> {
        fs::create_dir_all(dir)?;
        let json = serde_json::to_string_pretty(self)?;
        fs::write(Self::path_in(dir, &self.name), json)?;
        Ok(())
    }

    /// Load a named snapshot from the default directory.
    pub fn load(name: &str) -> Result<Self, SessionError> {
        Self::load_from(&Self::snapshots_dir(), name)
    }

    /// Save this snapshot into the default directory.
    pub fn save(&self) -> Result<(), SessionError> {
        self.save_to(&Self::snapshots_dir())
    }

    /// List all snapshot names in a directory, most recently updated first.
    pub fn list_in(dir: &Path) -> Vec<String> {
        let mut found = Vec::new();

        if let Ok(entries) = fs::read_dir(dir) {
            for entry in entries.flatten() {
                if let Ok(contents) = fs::read_to_string(entry.path()) {
                    if let Ok(snapshot) = serde_json::from_str::<SessionSnapshot>(&contents) {
                        found.push((snapshot.updated_at, snapshot.name));
                    }
                }
            }
        }

        found.sort_by(|a, b| b.0.cmp(&a.0));
        found.into_iter().map(|(_, name)| name).collect()
    }

    /// List all snapshot names in the default directory.
    pub fn list_all() -> Vec<String> {
        Self::list_in(&Self::snapshots_dir())
    }
}
