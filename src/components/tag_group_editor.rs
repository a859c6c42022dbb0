//! Tag Group Editor Component
//!
//! Name field, sortable tag list, attach input, and the copy actions that
//! move tag sets between the opened group and the opened post.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::delete_confirm::{DeleteDialog, DeleteTarget};
use crate::components::tag_list::{tg_list_config, SortableTagList};
use crate::context::AppContext;
use crate::models::TagGroup;

#[component]
pub fn TagGroupEditor(
    #[prop(into)] tag_group: Signal<Option<TagGroup>>,
    delete_dialog: DeleteDialog,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (name, set_name) = signal(String::new());
    let (name_baseline, set_name_baseline) = signal(String::new());
    let (attach_value, set_attach_value) = signal(String::new());

    Effect::new(move |_| {
        let loaded = tag_group.get().map(|tg| tg.name).unwrap_or_default();
        set_name.set(loaded.clone());
        set_name_baseline.set(loaded);
    });

    let submit_name = move || {
        let Some(tg_id) = ctx.current_tg.get_untracked() else { return };
        let value = name.get_untracked();
        if value == name_baseline.get_untracked() {
            return;
        }
        spawn_local(async move {
            match api::update_tag_group(tg_id, &value).await {
                Ok(()) => {
                    ctx.messages.success(format!("TagGroup {value} updated"));
                    ctx.reload();
                }
                Err(err) => ctx.messages.error(format!("Request failed: {err}")),
            }
        });
    };

    let attach_tags = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(tg_id) = ctx.current_tg.get_untracked() else { return };
        let raw = attach_value.get();
        if raw.trim().is_empty() {
            return;
        }
        spawn_local(async move {
            match api::attach_tg_tags(tg_id, &raw).await {
                Ok(()) => {
                    set_attach_value.set(String::new());
                    ctx.reload();
                }
                Err(err) => ctx.messages.error(format!("Request failed: {err}")),
            }
        });
    };

    // Cross-copy needs both an opened post and an opened group
    let both_open = move || ctx.current_post.get().is_some() && ctx.current_tg.get().is_some();

    let copy_tags = move |to_group: bool| {
        let (Some(post_id), Some(tg_id)) =
            (ctx.current_post.get_untracked(), ctx.current_tg.get_untracked())
        else {
            return;
        };
        spawn_local(async move {
            let result = if to_group {
                api::copy_tags_to_tg(post_id, tg_id).await
            } else {
                api::copy_tags_to_post(post_id, tg_id).await
            };
            match result {
                Ok(()) => ctx.reload(),
                Err(err) => ctx.messages.error(format!("Request failed: {err}")),
            }
        });
    };

    let tg_tags = Signal::derive(move || tag_group.get().map(|tg| tg.tags).unwrap_or_default());

    view! {
        <section
            class="tg-editor"
            style=move || if tag_group.get().is_some() { "" } else { "display: none;" }
        >
            <div class="tg-name-row">
                <input
                    type="text"
                    class="tg-name"
                    prop:value=move || name.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_name.set(input.value());
                    }
                    on:blur=move |_| submit_name()
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            set_name.set(name_baseline.get_untracked());
                            if let Some(target) = ev.target() {
                                if let Some(input) = target.dyn_ref::<web_sys::HtmlElement>() {
                                    let _ = input.blur();
                                }
                            }
                        }
                    }
                />
                <button
                    class="delete-tg-btn"
                    on:click=move |_| {
                        if let Some(tg_id) = ctx.current_tg.get_untracked() {
                            delete_dialog.request(DeleteTarget::TagGroup(tg_id));
                        }
                    }
                >
                    "Delete"
                </button>
                <button class="close-tg-btn" title="Close" on:click=move |_| ctx.open_tag_group(None)>
                    "×"
                </button>
            </div>

            <SortableTagList config=tg_list_config() owner=ctx.current_tg tags=tg_tags />

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

            <div
                class="copy-tags-row"
                style=move || if both_open() { "" } else { "display: none;" }
            >
                <button on:click=move |_| copy_tags(true)>"Copy tags from post"</button>
                <button on:click=move |_| copy_tags(false)>"Copy tags to post"</button>
            </div>
        </section>
    }
}
