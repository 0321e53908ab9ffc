//! Local preference store
//!
//! A small string key/value store that survives restarts. Collections are
//! stored as JSON arrays under well-known keys; missing or corrupt values
//! read back as empty collections.

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use guide_core::prelude::*;

/// Ordered set of visited section ids
pub const VISITED_SECTIONS_KEY: &str = "guide.visited_sections";

/// Ordered list of favorited prompt texts
pub const FAVORITES_KEY: &str = "guide.favorites";

/// Persistent string key/value storage
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: String) -> Result<()>;

    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Read a JSON string array. Missing, unreadable and corrupt values all
/// yield an empty list.
pub fn read_string_list(store: &dyn PreferenceStore, key: &str) -> Vec<String> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!("Failed to read preference {}: {}", key, e);
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<String>>(&raw) {
        Ok(items) => items,
        Err(e) => {
            warn!("Ignoring corrupt preference {}: {}", key, e);
            Vec::new()
        }
    }
}

/// Write a list as a JSON string array
pub fn write_string_list(
    store: &mut dyn PreferenceStore,
    key: &str,
    items: &[String],
) -> Result<()> {
    let raw = serde_json::to_string(items)?;
    store.set(key, raw)
}

// ─────────────────────────────────────────────────────────
// File-backed store
// ─────────────────────────────────────────────────────────

/// JSON object on disk, rewritten atomically on every change
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`. A missing file is an empty store; an
    /// unreadable or corrupt file is logged and treated as empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = Self::read_values(&path);
        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_values(path: &Path) -> BTreeMap<String, String> {
        if !path.exists() {
            debug!("No preferences file at {:?}", path);
            return BTreeMap::new();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(values) => {
                    debug!("Loaded preferences from {:?}", path);
                    values
                }
                Err(e) => {
                    warn!("Failed to parse {:?}: {}", path, e);
                    BTreeMap::new()
                }
            },
            Err(e) => {
                warn!("Failed to read {:?}: {}", path, e);
                BTreeMap::new()
            }
        }
    }

    fn flush(&self) -> Result<()> {
        let dir = self
            .path
            .parent()
            .ok_or_else(|| Error::storage(format!("Invalid preferences path {:?}", self.path)))?;

        if !dir.exists() {
            std::fs::create_dir_all(dir)
                .map_err(|e| Error::storage(format!("Failed to create data dir: {}", e)))?;
        }

        let content = serde_json::to_string_pretty(&self.values)?;
        let temp_path = dir.join(".preferences.json.tmp");

        // Atomic write: write to temp, then rename
        std::fs::write(&temp_path, content)
            .map_err(|e| Error::storage(format!("Failed to write temp file: {}", e)))?;
        std::fs::rename(&temp_path, &self.path)
            .map_err(|e| Error::storage(format!("Failed to rename temp file: {}", e)))?;

        trace!("Saved preferences to {:?}", self.path);
        Ok(())
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.values.insert(key.to_string(), value);
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.values.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────
// In-memory and unavailable stores
// ─────────────────────────────────────────────────────────

/// Store that lives only for the process lifetime
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}

/// Used when no data directory exists: reads are empty, writes fail
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableStore;

impl PreferenceStore for UnavailableStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn set(&mut self, key: &str, _value: String) -> Result<()> {
        Err(Error::storage(format!("Storage unavailable, {} not saved", key)))
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        Err(Error::storage(format!("Storage unavailable, {} not removed", key)))
    }
}
