//! Required Checks Card
//!
//! OK/NG checklist deciding between "cleared" and "resubmit".

use leptos::prelude::*;

use feedback_core::ChecklistKind;

use crate::context::use_app_context;
use crate::models::section;
use crate::store::{store_set_required, use_app_store, with_session};

#[component]
pub fn RequiredChecksCard() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let copy = section(ChecklistKind::Required);

    let all_passed = Memo::new(move |_| with_session(&store, |s| s.all_required_passed()));
    let items = move || with_session(&store, |s| s.required_checks.clone());

    let card_class = move || {
        if all_passed.get() { "card required passed" } else { "card required failed" }
    };

    view! {
        <section class=card_class>
            <header class="card-header">
                <h2 class="card-title">
                    <span class="card-icon">{move || if all_passed.get() { "✓" } else { "!" }}</span>
                    {copy.title}
                </h2>
                <div class="card-actions">
                    <button class="edit-btn" title=copy.editor_title on:click=move |_| ctx.open_editor(ChecklistKind::Required)>
                        "⚙"
                    </button>
                    <span class=move || if all_passed.get() { "status-badge passed" } else { "status-badge failed" }>
                        {move || if all_passed.get() { "課題クリア!" } else { "再提出" }}
                    </span>
                </div>
            </header>
            <p class="card-hint">{copy.hint}</p>

            <div class="check-list">
                <For
                    each=items
                    key=|item| (item.id.clone(), item.label.clone())
                    children=move |item| {
                        let id = item.id.clone();
                        let label = item.label.clone();
                        let passed = Memo::new(move |_| with_session(&store, |s| s.is_required_passed(&id)));
                        let row_class = move || if passed.get() { "check-row ok" } else { "check-row ng" };

                        view! {
                            <label class=row_class>
                                <input
                                    type="checkbox"
                                    prop:checked=move || passed.get()
                                    on:change=move |ev| store_set_required(&store, &item.id, event_target_checked(&ev))
                                />
                                <span class="check-label">{label}</span>
                                <span class="check-status">{move || if passed.get() { "OK" } else { "NG" }}</span>
                            </label>
                        }
                    }
                />
            </div>
        </section>
    }
}
