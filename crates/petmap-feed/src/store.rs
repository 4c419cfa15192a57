//! Key-value persistence capability for UI-layer flags.
//!
//! The app remembers small per-user facts between sessions: which
//! announcement banners were dismissed, whether the intro tour completed.
//! That is string-keyed, string-valued storage and nothing more, so the
//! capability is a minimal trait the shell can back with whatever the
//! platform offers.  [`MemoryStore`] is the in-process implementation used
//! in tests and anywhere persistence is not wanted.

use rustc_hash::FxHashMap;

use crate::error::StoreResult;

/// String key-value storage.
///
/// All methods return [`StoreResult`] so file- or platform-backed
/// implementations can surface I/O failures; pure in-memory backends
/// simply never error.
pub trait KeyValueStore {
    /// The stored value for `key`, if any.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Insert or overwrite `key`.
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;

    /// Remove `key`.  Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> StoreResult<()>;

    /// Whether `key` is present.
    fn contains(&self, key: &str) -> StoreResult<bool> {
        Ok(self.get(key)?.is_some())
    }
}

/// In-memory `KeyValueStore`.  Never errors.
#[derive(Default)]
pub struct MemoryStore {
    map: FxHashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.map.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.map.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        self.map.remove(key);
        Ok(())
    }
}
