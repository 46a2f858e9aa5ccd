//! Application Context
//!
//! Shared UI signals provided via Leptos Context API.

use leptos::prelude::*;

use feedback_core::ChecklistKind;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// List whose editor modal is open - read
    pub editing: ReadSignal<Option<ChecklistKind>>,
    /// List whose editor modal is open - write
    set_editing: WriteSignal<Option<ChecklistKind>>,
    /// Dismissible notice shown above the page - read
    pub notice: ReadSignal<Option<String>>,
    /// Dismissible notice shown above the page - write
    set_notice: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(
        editing: (ReadSignal<Option<ChecklistKind>>, WriteSignal<Option<ChecklistKind>>),
        notice: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
    ) -> Self {
        Self {
            editing: editing.0,
            set_editing: editing.1,
            notice: notice.0,
            set_notice: notice.1,
        }
    }

    pub fn open_editor(&self, kind: ChecklistKind) {
        self.set_editing.set(Some(kind));
    }

    pub fn close_editor(&self) {
        self.set_editing.set(None);
    }

    pub fn show_notice(&self, message: impl Into<String>) {
        self.set_notice.set(Some(message.into()));
    }

    pub fn dismiss_notice(&self) {
        self.set_notice.set(None);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
