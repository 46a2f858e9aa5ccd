//! Domain Layer
//!
//! Checklist items and the selection state layered over them.
//! This layer has NO external dependencies (except serde for serialization).

mod checklist_item;
mod selection;

pub use checklist_item::{ChecklistItem, ChecklistKind, ItemDraft};
pub use selection::{RequiredAnswers, Selection};
