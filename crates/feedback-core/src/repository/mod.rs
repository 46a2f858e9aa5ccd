//! Repository Layer
//!
//! Persistence of checklist lists over a string key-value store.

mod error;
mod traits;
mod memory;
mod item_store;

#[cfg(test)]
mod tests;

pub use error::{StoreError, StoreResult};
pub use traits::KeyValueStore;
pub use memory::MemoryStore;
pub use item_store::ItemStore;
