//! Key-Value Storage
//!
//! Browser `localStorage`/`sessionStorage` behind a small trait so controllers
//! can run against an in-memory store.

#[cfg(test)]
use std::collections::HashMap;
#[cfg(test)]
use std::sync::Mutex;

use web_sys::Storage;

/// Minimal get/set/remove store
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Which browser storage area to use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageArea {
    /// Survives browser restarts
    Local,
    /// Cleared when the tab closes
    Session,
}

/// Browser-backed store. Looks the storage object up on every call,
/// so it holds no JS handles.
#[derive(Debug, Clone, Copy)]
pub struct BrowserStore {
    area: StorageArea,
}

impl BrowserStore {
    pub fn local() -> Self {
        Self { area: StorageArea::Local }
    }

    pub fn session() -> Self {
        Self { area: StorageArea::Session }
    }

    fn storage(&self) -> Option<Storage> {
        let window = web_sys::window()?;
        let storage = match self.area {
            StorageArea::Local => window.local_storage(),
            StorageArea::Session => window.session_storage(),
        };
        storage.ok().flatten()
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let stored = self.storage().map(|s| s.set_item(key, value).is_ok());
        if stored != Some(true) {
            log::warn!("Could not write '{}' to {:?} storage", key, self.area);
        }
    }

    fn remove(&self, key: &str) {
        let removed = self.storage().map(|s| s.remove_item(key).is_ok());
        if removed != Some(true) {
            log::warn!("Could not remove '{}' from {:?} storage", key, self.area);
        }
    }
}

/// In-memory store for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("userEmail"), None);

        store.set("userEmail", "s@uni.edu");
        assert_eq!(store.get("userEmail").as_deref(), Some("s@uni.edu"));

        store.set("userEmail", "t@uni.edu");
        assert_eq!(store.get("userEmail").as_deref(), Some("t@uni.edu"));

        store.remove("userEmail");
        assert_eq!(store.get("userEmail"), None);
    }
}
