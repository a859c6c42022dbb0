//! Post Editor Component
//!
//! Title and description fields that submit on blur, the sortable tag list,
//! and the attach-tags input.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::autosize::{auto_grow, input_width_ch};
use crate::components::delete_confirm::{DeleteDialog, DeleteTarget};
use crate::components::tag_list::{post_list_config, SortableTagList};
use crate::context::AppContext;
use crate::models::Post;

#[component]
pub fn PostEditor(
    #[prop(into)] post: Signal<Option<Post>>,
    /// Live description text, shared with the preview block
    desc_draft: RwSignal<String>,
    set_preview_tags: WriteSignal<String>,
    delete_dialog: DeleteDialog,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (title, set_title) = signal(String::new());
    let (title_baseline, set_title_baseline) = signal(String::new());
    let (desc_baseline, set_desc_baseline) = signal(String::new());
    let (attach_value, set_attach_value) = signal(String::new());

    let desc_ref = NodeRef::<leptos::html::Textarea>::new();

    // Re-baseline the fields whenever the opened post (re)loads
    Effect::new(move |_| {
        match post.get() {
            Some(post) => {
                set_title.set(post.title.clone());
                set_title_baseline.set(post.title);
                desc_draft.set(post.description.clone());
                set_desc_baseline.set(post.description);
            }
            None => {
                set_title.set(String::new());
                set_title_baseline.set(String::new());
                desc_draft.set(String::new());
                set_desc_baseline.set(String::new());
            }
        }
        // Expand for prefilled content
        if let Some(textarea) = desc_ref.get() {
            auto_grow(&textarea);
        }
    });

    let submit_title = move || {
        let Some(post_id) = ctx.current_post.get_untracked() else { return };
        let value = title.get_untracked();
        if value == title_baseline.get_untracked() {
            return;
        }
        spawn_local(async move {
            match api::update_post_title(post_id, &value).await {
                Ok(()) => {
                    ctx.messages.success(format!("Post {value} updated"));
                    ctx.reload();
                }
                Err(err) => ctx.messages.error(format!("Request failed: {err}")),
            }
        });
    };

    let submit_desc = move || {
        let Some(post_id) = ctx.current_post.get_untracked() else { return };
        let value = desc_draft.get_untracked();
        if value == desc_baseline.get_untracked() {
            return;
        }
        spawn_local(async move {
            match api::update_post_desc(post_id, &value).await {
                Ok(()) => {
                    ctx.messages.success("Post updated");
                    ctx.reload();
                }
                Err(err) => ctx.messages.error(format!("Request failed: {err}")),
            }
        });
    };

    let attach_tags = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(post_id) = ctx.current_post.get_untracked() else { return };
        let raw = attach_value.get();
        if raw.trim().is_empty() {
            return;
        }
        spawn_local(async move {
            match api::attach_post_tags(post_id, &raw).await {
                Ok(()) => {
                    set_attach_value.set(String::new());
                    ctx.reload();
                }
                Err(err) => ctx.messages.error(format!("Request failed: {err}")),
            }
        });
    };

    let desc_changed = move || desc_draft.get() != desc_baseline.get();
    let post_tags = Signal::derive(move || post.get().map(|post| post.tags).unwrap_or_default());

    view! {
        <section
            class="post-editor"
            style=move || if post.get().is_some() { "" } else { "display: none;" }
        >
            <div class="post-title-row">
                <input
                    type="text"
                    class="post-title shrinkable-input"
                    style=move || format!("width: {};", input_width_ch(title.get().chars().count()))
                    prop:value=move || title.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_title.set(input.value());
                    }
                    on:blur=move |_| submit_title()
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            set_title.set(title_baseline.get_untracked());
                            if let Some(target) = ev.target() {
                                if let Some(input) = target.dyn_ref::<web_sys::HtmlElement>() {
                                    let _ = input.blur();
                                }
                            }
                        }
                    }
                />
                <button
                    class="delete-post-btn"
                    on:click=move |_| {
                        if let Some(post_id) = ctx.current_post.get_untracked() {
                            delete_dialog.request(DeleteTarget::Post(post_id));
                        }
                    }
                >
                    "Delete"
                </button>
                <button class="close-post-btn" title="Close" on:click=move |_| ctx.open_post(None)>
                    "×"
                </button>
            </div>

            <textarea
                class="post-desc"
                node_ref=desc_ref
                placeholder="Description..."
                prop:value=move || desc_draft.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let textarea = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                    desc_draft.set(textarea.value());
                    auto_grow(textarea);
                }
                on:blur=move |_| submit_desc()
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        ev.prevent_default();
                        desc_draft.set(desc_baseline.get_untracked());
                        if let Some(target) = ev.target() {
                            if let Some(textarea) = target.dyn_ref::<web_sys::HtmlElement>() {
                                let _ = textarea.blur();
                            }
                        }
                    } else if ev.key() == "Enter" && ev.shift_key() {
                        // Submit on Shift+Enter instead of inserting a newline
                        ev.prevent_default();
                        submit_desc();
                    }
                }
            ></textarea>
            <button
                class=move || if desc_changed() { "update-desc-btn btn-active" } else { "update-desc-btn" }
                on:click=move |_| submit_desc()
            >
                "Update"
            </button>

            <SortableTagList
                config=post_list_config(set_preview_tags)
                owner=ctx.current_post
                tags=post_tags
            />

            <form class="attach-tags-form" on:submit=attach_tags>
                <input
                    type="text"
                    placeholder="Add tags..."
                    prop:value=move || attach_value.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_attach_value.set(input.value());
                    }
                />
                <button type="submit">"+"</button>
            </form>
        </section>
    }
}
