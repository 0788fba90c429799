//! # Filesystem-backed session store
//!
//! [`FileStore`] is a [`KeyValueStore`] that keeps every key in a single flat TOML
//! table on disk. It is the native stand-in for `localStorage`, so desktop runs keep
//! the session across restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── session.toml      # user = "...", token = "...", fanId = "...", theme = "..."
//! ```
//!
//! ## Platform data directories
//!
//! Callers usually pass `dirs::data_dir()/celebconnect`:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/celebconnect/` |
//! | Linux | `~/.local/share/celebconnect/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\celebconnect\` |
//!
//! The file is re-read on every access, which keeps several handles to the same
//! directory consistent without any caching.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::kv::KeyValueStore;

const SESSION_FILE: &str = "session.toml";

/// Filesystem-backed KeyValueStore for native platforms.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn session_path(&self) -> PathBuf {
        self.base.join(SESSION_FILE)
    }

    fn load(&self) -> BTreeMap<String, String> {
        let Ok(content) = std::fs::read_to_string(self.session_path()) else {
            return BTreeMap::new();
        };
        toml::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!("Ignoring unreadable session file: {e}");
            BTreeMap::new()
        })
    }

    fn save(&self, values: &BTreeMap<String, String>) {
        let content = match toml::to_string(values) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Failed to serialize session: {e}");
                return;
            }
        };
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            tracing::warn!("Failed to create {}: {e}", self.base.display());
            return;
        }
        if let Err(e) = std::fs::write(self.session_path(), content) {
            tracing::warn!("Failed to write session file: {e}");
        }
    }

    /// Delete the session file under `base`, if any.
    pub fn delete(base: &Path) {
        let _ = std::fs::remove_file(base.join(SESSION_FILE));
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.load().remove(key)
    }

    fn set(&self, key: &str, value: &str) {
        let mut values = self.load();
        values.insert(key.to_string(), value.to_string());
        self.save(&values);
    }

    fn remove(&self, key: &str) {
        let mut values = self.load();
        if values.remove(key).is_some() {
            self.save(&values);
        }
    }
}
