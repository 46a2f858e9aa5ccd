//! Selection Card
//!
//! Checklist of good points or advice items; ticked items are quoted
//! verbatim in the feedback.

use leptos::prelude::*;

use feedback_core::ChecklistKind;

use crate::components::OtherCommentInput;
use crate::context::use_app_context;
use crate::models::section;
use crate::store::{store_toggle, use_app_store, with_session};

/// Card for `ChecklistKind::GoodPoint` or `ChecklistKind::Advice`
#[component]
pub fn SelectionCard(kind: ChecklistKind) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let copy = section(kind);

    let items = move || with_session(&store, |s| s.items(kind).to_vec());

    view! {
        <section class=format!("card {}", copy.class)>
            <header class="card-header">
                <h2 class="card-title">{copy.title}</h2>
                <button class="edit-btn" title=copy.editor_title on:click=move |_| ctx.open_editor(kind)>
                    "⚙"
                </button>
            </header>
            <p class="card-hint">{copy.hint}</p>

            <div class="check-list">
                <For
                    each=items
                    key=|item| (item.id.clone(), item.label.clone(), item.generated_text.clone())
                    children=move |item| {
                        let id = item.id.clone();
                        let label = item.label.clone();
                        let text = item.generated_text.clone().unwrap_or_default();
                        let selected = Memo::new(move |_| with_session(&store, |s| s.is_selected(kind, &id)));
                        let row_class = move || if selected.get() { "check-row selected" } else { "check-row" };

                        view! {
                            <label class=row_class>
                                <input
                                    type="checkbox"
                                    prop:checked=move || selected.get()
                                    on:change=move |_| store_toggle(&store, kind, &item.id)
                                />
                                <div class="check-body">
                                    <span class="check-label">{label}</span>
                                    <p class="check-text">{text}</p>
                                </div>
                            </label>
                        }
                    }
                />
            </div>

            {(kind == ChecklistKind::Advice).then(|| view! { <OtherCommentInput /> })}
        </section>
    }
}
