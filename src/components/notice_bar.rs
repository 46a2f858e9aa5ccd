//! Notice Bar Component
//!
//! Soft, dismissible notice for non-fatal failures (clipboard, storage).

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn NoticeBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        {move || ctx.notice.get().map(|message| view! {
            <div class="notice-bar" role="status">
                <span class="notice-text">{message}</span>
                <button class="close-btn" on:click=move |_| ctx.dismiss_notice()>"×"</button>
            </div>
        })}
    }
}
