//! Item Editor Modal
//!
//! Edits a draft copy of one checklist list. Nothing touches the session
//! or localStorage until "保存" is pressed; cancel drops the draft.

use leptos::prelude::*;

use feedback_core::items::{add_item, remove_item, update_error_text, update_label, update_text};
use feedback_core::{ChecklistItem, ChecklistKind, ItemDraft};

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::models::{section, ERROR_TEXT_LABEL, TEXT_LABEL};
use crate::store::{store_save_items, use_app_store, with_session};

/// Current value of one field of the draft item `id`
fn draft_field(items: &[ChecklistItem], id: &str, pick: impl Fn(&ChecklistItem) -> Option<&String>) -> String {
    items
        .iter()
        .find(|item| item.id == id)
        .and_then(pick)
        .cloned()
        .unwrap_or_default()
}

/// Editor for the list of `kind`, open while the context says so
#[component]
pub fn ItemEditorModal(kind: ChecklistKind) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let copy = section(kind);

    let is_open = Memo::new(move |_| ctx.editing.get() == Some(kind));

    let (draft_items, set_draft_items) = signal(Vec::<ChecklistItem>::new());
    let (new_label, set_new_label) = signal(String::new());
    let (new_text, set_new_text) = signal(String::new());
    let (new_error_text, set_new_error_text) = signal(String::new());

    // Take a fresh copy of the list each time the modal opens
    Effect::new(move |_| {
        if is_open.get() {
            let items = untrack(move || with_session(&store, |s| s.items(kind).to_vec()));
            set_draft_items.set(items);
            set_new_label.set(String::new());
            set_new_text.set(String::new());
            set_new_error_text.set(String::new());
        }
    });

    let add = move |_| {
        let draft = ItemDraft::new(new_label.get())
            .text(new_text.get())
            .error_text(new_error_text.get())
            .for_kind(kind);
        if draft.label.trim().is_empty() {
            return;
        }
        let stamp = js_sys::Date::now() as u64;
        set_draft_items.update(|items| *items = add_item(items, &draft, stamp));
        set_new_label.set(String::new());
        set_new_text.set(String::new());
        set_new_error_text.set(String::new());
    };

    let save = move |_| {
        let items = draft_items.get();
        let count = items.len();
        match store_save_items(&store, kind, items) {
            Ok(()) => log::info!("[EDITOR] saved {} {} items", count, kind.as_str()),
            Err(e) => {
                log::warn!("[EDITOR] {}", e);
                ctx.show_notice("項目を保存できませんでした。変更はページを再読み込みするまで有効です。");
            }
        }
        ctx.close_editor();
    };

    view! {
        <Show when=move || is_open.get()>
            <div class="modal-overlay" on:click=move |_| ctx.close_editor()>
                <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h3 class="modal-title">"⚙ " {copy.editor_title}</h3>
                        <button class="close-btn" on:click=move |_| ctx.close_editor()>"×"</button>
                    </div>

                    // Existing items
                    <div class="editor-items">
                        <For
                            each=move || draft_items.get()
                            key=|item| item.id.clone()
                            children=move |item| {
                                let id = StoredValue::new(item.id);
                                let label = move || draft_items.with(|items| {
                                    draft_field(items, &id.get_value(), |i| Some(&i.label))
                                });
                                let text = move || draft_items.with(|items| {
                                    draft_field(items, &id.get_value(), |i| i.generated_text.as_ref())
                                });
                                let error_text = move || draft_items.with(|items| {
                                    draft_field(items, &id.get_value(), |i| i.error_text.as_ref())
                                });

                                view! {
                                    <div class="editor-item">
                                        <div class="editor-item-row">
                                            <input
                                                type="text"
                                                class="editor-input"
                                                placeholder="ラベル"
                                                prop:value=label
                                                on:input=move |ev| {
                                                    let value = event_target_value(&ev);
                                                    set_draft_items.update(|items| *items = update_label(items, &id.get_value(), &value));
                                                }
                                            />
                                            <DeleteConfirmButton
                                                button_class="item-delete-btn"
                                                on_confirm=Callback::new(move |_| {
                                                    set_draft_items.update(|items| *items = remove_item(items, &id.get_value()));
                                                })
                                            />
                                        </div>
                                        {kind.has_text().then(|| view! {
                                            <textarea
                                                class="editor-textarea"
                                                rows="2"
                                                placeholder=TEXT_LABEL
                                                prop:value=text
                                                on:input=move |ev| {
                                                    let value = event_target_value(&ev);
                                                    set_draft_items.update(|items| *items = update_text(items, &id.get_value(), &value));
                                                }
                                            ></textarea>
                                        })}
                                        {kind.has_error_text().then(|| view! {
                                            <textarea
                                                class="editor-textarea"
                                                rows="2"
                                                placeholder=ERROR_TEXT_LABEL
                                                prop:value=error_text
                                                on:input=move |ev| {
                                                    let value = event_target_value(&ev);
                                                    set_draft_items.update(|items| *items = update_error_text(items, &id.get_value(), &value));
                                                }
                                            ></textarea>
                                        })}
                                    </div>
                                }
                            }
                        />
                    </div>

                    // New item
                    <div class="editor-new-item">
                        <p class="editor-new-title">"新しい項目を追加"</p>
                        <input
                            type="text"
                            class="editor-input"
                            placeholder="ラベル（例：コードが読みやすい）"
                            prop:value=move || new_label.get()
                            on:input=move |ev| set_new_label.set(event_target_value(&ev))
                        />
                        {kind.has_text().then(|| view! {
                            <textarea
                                class="editor-textarea"
                                rows="2"
                                placeholder=format!("{}（例：コードが読みやすく整理されています。）", TEXT_LABEL)
                                prop:value=move || new_text.get()
                                on:input=move |ev| set_new_text.set(event_target_value(&ev))
                            ></textarea>
                        })}
                        {kind.has_error_text().then(|| view! {
                            <textarea
                                class="editor-textarea"
                                rows="2"
                                placeholder=ERROR_TEXT_LABEL
                                prop:value=move || new_error_text.get()
                                on:input=move |ev| set_new_error_text.set(event_target_value(&ev))
                            ></textarea>
                        })}
                        <button
                            class="add-btn"
                            prop:disabled=move || new_label.get().trim().is_empty()
                            on:click=add
                        >
                            "＋ 追加"
                        </button>
                    </div>

                    <div class="modal-footer">
                        <button class="cancel-btn" on:click=move |_| ctx.close_editor()>"✗ キャンセル"</button>
                        <button class="save-btn" on:click=save>"✓ 保存"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
