//! Feedback Manager App
//!
//! Main application component: checklists on the left, live preview on the right.

use leptos::prelude::*;
use reactive_stores::Store;

use feedback_core::ChecklistKind;

use crate::components::{FeedbackPreview, ItemEditorModal, NoticeBar, RequiredChecksCard, SelectionCard};
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::restore());
    let (editing, set_editing) = signal::<Option<ChecklistKind>>(None);
    let (notice, set_notice) = signal::<Option<String>>(None);

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new((editing, set_editing), (notice, set_notice)));

    {
        let session = store.session().read_untracked();
        log::info!(
            "[APP] loaded {} required checks, {} good points, {} advice items",
            session.required_checks.len(),
            session.good_points.len(),
            session.advice_items.len()
        );
    }

    view! {
        <div class="app-layout">
            <header class="app-header">
                <div class="app-logo">"✦"</div>
                <div>
                    <h1>"Feedback Manager"</h1>
                    <p class="app-subtitle">"GitHub課題フィードバック作成ツール"</p>
                </div>
            </header>

            <NoticeBar />

            <main class="main-content">
                // Left: checklists
                <div class="checklist-column">
                    <RequiredChecksCard />
                    <SelectionCard kind=ChecklistKind::GoodPoint />
                    <SelectionCard kind=ChecklistKind::Advice />
                </div>

                // Right: preview
                <div class="preview-column">
                    <FeedbackPreview />
                </div>
            </main>

            {ChecklistKind::ALL.into_iter().map(|kind| view! { <ItemEditorModal kind=kind /> }).collect_view()}
        </div>
    }
}
