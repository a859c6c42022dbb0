//! Preview Panel Component
//!
//! Read-only mirror of the post being composed: live description text plus
//! the server-rendered tag line, with a copy-to-clipboard button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;

#[component]
pub fn PreviewPanel(
    desc_draft: RwSignal<String>,
    preview_tags: ReadSignal<String>,
    visible: RwSignal<bool>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let copy = move |_| {
        let desc = desc_draft.get_untracked();
        let tags = preview_tags.get_untracked();
        let tags = tags.trim().to_string();
        let combined = if tags.is_empty() {
            desc
        } else {
            format!("{desc}\n\n{tags}")
        };

        let Some(win) = web_sys::window() else { return };
        let promise = win.navigator().clipboard().write_text(&combined);
        let messages = ctx.messages;
        spawn_local(async move {
            match wasm_bindgen_futures::JsFuture::from(promise).await {
                Ok(_) => messages.success("Copied to clipboard!"),
                Err(err) => messages.error(format!("Error copying text: {err:?}")),
            }
        });
    };

    view! {
        <aside class="post-preview" class:visible=move || visible.get()>
            <div class="post-preview-header">"Preview"</div>
            <div class="post-preview-desc">{move || desc_draft.get()}</div>
            <div id="post-preview-tags" class="post-preview-tags">{move || preview_tags.get()}</div>
            <button class="copy-preview-btn" on:click=copy>"Copy"</button>
        </aside>
    }
}
