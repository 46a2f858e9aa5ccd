//! Feedback Core
//!
//! Layered the same way as the app:
//! - domain: checklist items, list kinds and selection state
//! - compose: renders selections into the feedback message
//! - repository: key-value persistence of checklist lists
//! - session: the controller that owns all mutable state

pub mod domain;
pub mod compose;
pub mod items;
pub mod repository;
pub mod session;

mod defaults;

pub use compose::{compose, FeedbackInput, Phrases};
pub use defaults::default_items;
pub use domain::{ChecklistItem, ChecklistKind, ItemDraft, RequiredAnswers, Selection};
pub use repository::{ItemStore, KeyValueStore, MemoryStore, StoreError, StoreResult};
pub use session::FeedbackSession;
