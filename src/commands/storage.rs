//! Storage Commands
//!
//! `KeyValueStore` backed by the browser's localStorage.

use feedback_core::{ItemStore, KeyValueStore, StoreError, StoreResult};

/// Handle to `window.localStorage`, looked up on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

fn local_storage() -> Result<web_sys::Storage, String> {
    let window = web_sys::window().ok_or("No window available")?;
    window
        .local_storage()
        .map_err(|e| format!("Failed to open localStorage: {:?}", e))?
        .ok_or_else(|| "localStorage is disabled".to_string())
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        local_storage()
            .map_err(StoreError::Unavailable)?
            .get_item(key)
            .map_err(|e| StoreError::unavailable(format!("Failed to read {}: {:?}", key, e)))
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        local_storage()
            .map_err(StoreError::Unavailable)?
            .set_item(key, value)
            .map_err(|e| StoreError::unavailable(format!("Failed to write {}: {:?}", key, e)))
    }
}

/// Checklist persistence over localStorage
pub fn item_store() -> ItemStore<LocalStorage> {
    ItemStore::new(LocalStorage)
}
