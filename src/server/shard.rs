use parking_lot::RwLock;
use std::collections::HashMap;

/// One independently lockable partition of the key space.
#[derive(Debug, Default)]
pub struct Shard {
    pub(super) data: RwLock<HashMap<String, String>>,
}

impl Shard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites `key`. Exclusive lock.
    pub fn set(&self, key: String, value: String) {
        self.data.write().insert(key, value);
    }

    /// Shared lock.
    pub fn get(&self, key: &str) -> Option<String> {
        self.data.read().get(key).cloned()
    }

    /// Removes `key` if present. Returns whether it was. Exclusive lock.
    pub fn delete(&self, key: &str) -> bool {
        self.data.write().remove(key).is_some()
    }

    /// Shared lock.
    pub fn exists(&self, key: &str) -> bool {
        self.data.read().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }
}
