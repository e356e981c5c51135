//! Persisted key/value preferences
//!
//! The widget stores a single value: the corner the button was last snapped
//! to, under [`POSITION_KEY`].

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Key holding the button side ("left" or "right")
pub const POSITION_KEY: &str = "position";

/// Named string values that survive page loads
pub trait PreferenceStore {
    /// Look up a value; absent keys yield `None`
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Preferences kept for the lifetime of the process
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
    writes: usize,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `set` calls so far
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

/// Preferences stored as a flat TOML table on disk
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferences {
    /// Open the store at `path`; a missing file starts empty
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            toml::from_str(&content).map_err(|e| Error::Preferences(e.to_string()))?
        } else {
            BTreeMap::new()
        };

        Ok(Self { path, values })
    }

    /// Open the store at the default location, starting empty if it is unreadable
    pub fn open_default() -> Self {
        let path = Self::default_path();
        Self::open(&path).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Discarding unreadable preferences");
            Self {
                path,
                values: BTreeMap::new(),
            }
        })
    }

    /// ~/.local/share/pagescroll/preferences.toml (platform data dir)
    pub fn default_path() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pagescroll")
            .join("preferences.toml")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string(&self.values).map_err(|e| Error::Preferences(e.to_string()))?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }
}
