//! Checklist List Persistence
//!
//! Each list is stored whole, as a JSON array, under its kind's key.

use crate::defaults::default_items;
use crate::domain::{ChecklistItem, ChecklistKind};

use super::error::{StoreError, StoreResult};
use super::traits::KeyValueStore;

/// Loads and saves checklist lists through a `KeyValueStore`
#[derive(Debug, Clone)]
pub struct ItemStore<S> {
    backend: S,
}

impl<S: KeyValueStore> ItemStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Read the list stored under `key`
    ///
    /// Absent keys yield `Ok(None)`; undecodable values are `Malformed`.
    pub fn load(&self, key: &str) -> StoreResult<Option<Vec<ChecklistItem>>> {
        let Some(raw) = self.backend.get(key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Malformed {
                key: key.to_string(),
                source,
            })
    }

    /// Replace the list stored under `key`
    pub fn save(&self, key: &str, items: &[ChecklistItem]) -> StoreResult<()> {
        let raw = serde_json::to_string(items)?;
        self.backend.set(key, &raw)?;
        log::debug!("saved {} items under {}", items.len(), key);
        Ok(())
    }

    /// Stored list for `kind`, or the built-in defaults when nothing usable is stored
    pub fn load_or_default(&self, kind: ChecklistKind) -> Vec<ChecklistItem> {
        match self.load(kind.storage_key()) {
            Ok(Some(items)) => items,
            Ok(None) => default_items(kind),
            Err(e) => {
                log::warn!("falling back to default {} items: {}", kind.as_str(), e);
                default_items(kind)
            }
        }
    }
}
