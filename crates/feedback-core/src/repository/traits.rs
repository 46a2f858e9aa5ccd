//! Repository Layer - Core Traits
//!
//! The durable store is any string-keyed map of string values.
//! The app uses browser localStorage; tests use `MemoryStore`.

use super::error::StoreResult;

/// Synchronous string key-value store
pub trait KeyValueStore {
    /// Read the value under `key`; `Ok(None)` when absent
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Replace the value under `key`
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}

