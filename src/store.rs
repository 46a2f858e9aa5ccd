//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use feedback_core::{ChecklistItem, ChecklistKind, FeedbackSession, StoreResult};

use crate::commands;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Checklist lists, answers, selections and the free comment
    pub session: FeedbackSession,
}

impl AppState {
    /// State restored from localStorage, defaults where nothing usable is stored
    pub fn restore() -> Self {
        Self {
            session: FeedbackSession::restore(&commands::item_store()),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Read from the session, tracking it
pub fn with_session<T>(store: &AppStore, f: impl FnOnce(&FeedbackSession) -> T) -> T {
    f(&*store.session().read())
}

/// Mark a required check as passed or failed
pub fn store_set_required(store: &AppStore, id: &str, passed: bool) {
    store.session().write().set_required(id, passed);
}

/// Flip a good point or advice item
pub fn store_toggle(store: &AppStore, kind: ChecklistKind, id: &str) {
    let field = store.session();
    let mut session = field.write();
    match kind {
        ChecklistKind::Required => {
            let passed = session.is_required_passed(id);
            session.set_required(id, !passed);
        }
        ChecklistKind::GoodPoint => {
            session.toggle_good_point(id);
        }
        ChecklistKind::Advice => {
            session.toggle_advice(id);
        }
    }
}

pub fn store_set_comment(store: &AppStore, comment: String) {
    store.session().write().set_other_comment(comment);
}

/// Clear answers, selections and the comment
pub fn store_reset(store: &AppStore) {
    store.session().write().reset();
}

/// Commit an edited list to the session and localStorage
pub fn store_save_items(store: &AppStore, kind: ChecklistKind, items: Vec<ChecklistItem>) -> StoreResult<()> {
    store
        .session()
        .write()
        .save_items(&commands::item_store(), kind, items)
}
