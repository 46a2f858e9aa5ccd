//! Other Comment Input
//!
//! Free-text field appended to the advice block.

use leptos::prelude::*;

use crate::store::{store_set_comment, use_app_store, with_session};

#[component]
pub fn OtherCommentInput() -> impl IntoView {
    let store = use_app_store();
    let comment = move || with_session(&store, |s| s.other_comment.clone());

    view! {
        <div class="other-comment">
            <p class="other-comment-title">"その他（自由記述）"</p>
            <textarea
                class="other-comment-textarea"
                rows="3"
                placeholder="テンプレートにない内容を自由に入力..."
                prop:value=comment
                on:input=move |ev| store_set_comment(&store, event_target_value(&ev))
            ></textarea>
        </div>
    }
}
