//! In-memory store, used by tests and as a fallback when no durable
//! backend is reachable.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use super::error::{StoreError, StoreResult};
use super::traits::KeyValueStore;

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
    failing: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// When set, every operation fails with `StoreError::Unavailable`
    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }

    fn check(&self) -> StoreResult<()> {
        if self.failing.get() {
            return Err(StoreError::unavailable("memory store set to fail"));
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.check()?;
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.check()?;
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
