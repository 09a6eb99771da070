//! Key/value storage
//!
//! Persistent client-side store backing the reference-data cache and
//! the access token. The backing store is an injected capability; two
//! implementations ship with the crate: an in-memory map and a JSON
//! file store.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde_json::Value;

/// Store key holding the bearer access token
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

/// Generic has/get/set key/value interface
///
/// Values are JSON so heterogeneous entries (code lists, variables,
/// tokens) share one store. Writes are best-effort: implementations
/// log failures instead of surfacing them.
pub trait KeyValueStore: Send + Sync {
    fn has(&self, key: &str) -> bool;
    fn get(&self, key: &str) -> Option<Value>;
    fn set(&self, key: &str, value: Value);
}

/// In-memory store
///
/// Entries live for the lifetime of the process. Default store when
/// none is injected; also what tests use.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn has(&self, key: &str) -> bool {
        self.entries.read().unwrap().contains_key(key)
    }

    fn get(&self, key: &str) -> Option<Value> {
        self.entries.read().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: Value) {
        self.entries.write().unwrap().insert(key.to_string(), value);
    }
}

/// JSON file store
///
/// Persists the whole map to one pretty-printed JSON file on every
/// write, loading it back on construction. Entries survive restarts
/// and are never evicted.
#[derive(Debug)]
pub struct JsonFileStore {
    file_path: PathBuf,
    entries: RwLock<HashMap<String, Value>>,
}

impl JsonFileStore {
    /// Load the store from `file_path`, starting empty if the file
    /// does not exist yet
    pub fn load(file_path: impl Into<PathBuf>) -> Result<Self, std::io::Error> {
        let file_path = file_path.into();

        let entries = if file_path.exists() {
            let content = std::fs::read_to_string(&file_path)?;
            serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!(path = %file_path.display(), error = %e, "Store file corrupt, starting empty");
                HashMap::new()
            })
        } else {
            HashMap::new()
        };

        Ok(Self {
            file_path,
            entries: RwLock::new(entries),
        })
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn save(&self, entries: &HashMap<String, Value>) {
        let content = match serde_json::to_string_pretty(entries) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize store");
                return;
            }
        };
        if let Some(parent) = self.file_path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!(error = %e, "Failed to create store directory");
                return;
            }
        }
        if let Err(e) = std::fs::write(&self.file_path, content) {
            tracing::warn!(path = %self.file_path.display(), error = %e, "Failed to write store file");
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn has(&self, key: &str) -> bool {
        self.entries.read().unwrap().contains_key(key)
    }

    fn get(&self, key: &str) -> Option<Value> {
        self.entries.read().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: Value) {
        let mut entries = self.entries.write().unwrap();
        entries.insert(key.to_string(), value);
        self.save(&entries);
    }
}
