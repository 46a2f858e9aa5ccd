//! Feedback Preview
//!
//! Live view of the composed message with reset and copy actions.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::store::{store_reset, use_app_store, with_session};

/// How long the "copied" indicator stays on
const COPIED_RESET_MS: u32 = 2_000;

#[component]
pub fn FeedbackPreview() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (copied, set_copied) = signal(false);
    // Bumped on every successful copy; only the latest copy clears the flag.
    let (copy_generation, set_copy_generation) = signal(0u32);

    let feedback = Memo::new(move |_| with_session(&store, |s| s.compose()));
    let is_resubmit = Memo::new(move |_| with_session(&store, |s| s.is_resubmit()));

    let copy = move |_| {
        let text = feedback.get_untracked();
        spawn_local(async move {
            match commands::write_text(&text).await {
                Ok(()) => {
                    let generation = copy_generation.get_untracked().wrapping_add(1);
                    set_copy_generation.set(generation);
                    set_copied.set(true);
                    TimeoutFuture::new(COPIED_RESET_MS).await;
                    if copy_generation.get_untracked() == generation {
                        set_copied.set(false);
                    }
                }
                Err(e) => {
                    log::warn!("[PREVIEW] {}", e);
                    ctx.show_notice("クリップボードにコピーできませんでした。テキストを選択してコピーしてください。");
                }
            }
        });
    };

    let reset = move |_| {
        store_reset(&store);
        log::debug!("[PREVIEW] selections reset");
    };

    let card_class = move || {
        if is_resubmit.get() { "card preview resubmit" } else { "card preview cleared" }
    };

    view! {
        <section class=card_class>
            <header class="card-header">
                <div>
                    <h2 class="card-title">
                        "フィードバック"
                        <span class=move || if is_resubmit.get() { "status-badge failed" } else { "status-badge passed" }>
                            {move || if is_resubmit.get() { "再提出" } else { "クリア!" }}
                        </span>
                    </h2>
                    <p class="card-hint">"チェック内容に応じて自動生成されます"</p>
                </div>
                <div class="card-actions">
                    <button class="reset-btn" on:click=reset>"↺ リセット"</button>
                    <button class="copy-btn" on:click=copy>
                        {move || if copied.get() { "✓ コピー完了!" } else { "コピー" }}
                    </button>
                </div>
            </header>
            <pre class="feedback-text">{move || feedback.get()}</pre>
        </section>
    }
}
