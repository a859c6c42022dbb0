//! Sortable Tag List Component
//!
//! Draggable tag rows. Dropping a row commits the list's current visual
//! order to the server in a single request; failures leave the dragged
//! order on screen untouched.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use leptos_sortable::{
    apply_move, bind_global_mouseup, create_sort_signals, make_on_mousedown, make_on_mouseleave,
    make_on_row_mouseenter,
};

use crate::api;
use crate::context::AppContext;
use crate::models::Tag;

/// Container id for the post tag list
pub const POST_TAG_LIST_ID: &str = "dnd-list-post";
/// Container id for the tag group tag list
pub const TG_TAG_LIST_ID: &str = "dnd-list-tg";

/// Hidden input carrying each row's identifier
const ROW_ID_INPUT: &str = "tag_to_detach";

/// Which entity owns a sortable list
#[derive(Clone, Copy, PartialEq)]
pub enum ListOwner {
    Post,
    TagGroup,
}

/// Per-list configuration: container id, endpoint builder, optional preview
#[derive(Clone, Copy)]
pub struct TagListConfig {
    /// DOM id of the list container
    pub list_id: &'static str,
    /// Builds the reorder endpoint from the owner's object id
    pub endpoint: fn(u32) -> String,
    /// Preview region text refreshed from `tag_text` on success
    pub preview: Option<WriteSignal<String>>,
    pub owner_kind: ListOwner,
}

/// Post tag list: preview region configured
pub fn post_list_config(preview: WriteSignal<String>) -> TagListConfig {
    TagListConfig {
        list_id: POST_TAG_LIST_ID,
        endpoint: api::post_reorder_url,
        preview: Some(preview),
        owner_kind: ListOwner::Post,
    }
}

/// Tag group list: no preview, server sends no tag_text for groups
pub fn tg_list_config() -> TagListConfig {
    TagListConfig {
        list_id: TG_TAG_LIST_ID,
        endpoint: api::tg_reorder_url,
        preview: None,
        owner_kind: ListOwner::TagGroup,
    }
}

/// Sortable tag list bound to one owner entity
#[component]
pub fn SortableTagList(
    config: TagListConfig,
    /// Owner entity id (None while nothing is open)
    owner: ReadSignal<Option<u32>>,
    /// Server-ordered tags of the owner
    #[prop(into)] tags: Signal<Vec<Tag>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // Visual order. The DOM mirrors this signal and is read back at commit
    // time, so the submitted sequence always matches what is on screen.
    let (rows, set_rows) = signal(Vec::<Tag>::new());

    Effect::new(move |_| {
        set_rows.set(tags.get());
    });

    let sort = create_sort_signals();

    bind_global_mouseup(sort, move |from, to| {
        if let Some(to) = to {
            set_rows.update(|rows| apply_move(rows, from, to));
        }
        // Commit on every drag end, position change or not
        let Some(owner_id) = owner.get_untracked() else { return };
        let endpoint = (config.endpoint)(owner_id);
        spawn_local(async move {
            commit_order(config, endpoint, ctx).await;
        });
    });

    let is_dragging = move || sort.dragging_read.get().is_some();

    view! {
        <div
            id=config.list_id
            class=move || if is_dragging() { "tag-list dragging" } else { "tag-list" }
            data-owner-id=move || owner.get().map(|id| id.to_string()).unwrap_or_default()
        >
            {move || rows.get().into_iter().enumerate().map(|(index, tag)| {
                let on_mousedown = make_on_mousedown(sort, index);
                let on_mouseenter = make_on_row_mouseenter(sort, index);
                let on_mouseleave = make_on_mouseleave(sort);
                let tag_id = tag.id;

                let row_class = move || {
                    let mut class = String::from("tag");
                    if sort.dragging_read.get() == Some(index) {
                        class.push_str(" dragging-row");
                    } else if sort.hover_read.get() == Some(index) {
                        class.push_str(" drag-over");
                    }
                    class
                };

                let detach = move |_| {
                    let Some(owner_id) = owner.get_untracked() else { return };
                    spawn_local(async move {
                        let result = match config.owner_kind {
                            ListOwner::Post => api::detach_post_tag(owner_id, tag_id).await,
                            ListOwner::TagGroup => api::detach_tg_tag(owner_id, tag_id).await,
                        };
                        match result {
                            Ok(()) => ctx.reload(),
                            Err(err) => ctx.messages.error(format!("Request failed: {err}")),
                        }
                    });
                };

                view! {
                    <div
                        class=row_class
                        on:mousedown=on_mousedown
                        on:mouseenter=on_mouseenter
                        on:mouseleave=on_mouseleave
                    >
                        <input type="hidden" name=ROW_ID_INPUT value=tag.id.to_string() />
                        <span class="tag-name">"#"{tag.name.clone()}</span>
                        <button class="tag-detach-btn" title="Detach" on:click=detach>"×"</button>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

/// Read the list's current visual order and commit it. Every call issues
/// exactly one request; overlapping commits from rapid drags are independent.
async fn commit_order(config: TagListConfig, endpoint: String, ctx: AppContext) {
    let Some(order) = collect_tag_order(config.list_id) else {
        return;
    };
    web_sys::console::log_1(
        &format!("[SORT] Committing {} ids to {}", order.len(), endpoint).into(),
    );

    match api::reorder_tags(&endpoint, &order).await {
        Ok(response) if response.success => {
            ctx.messages.success("Tag order saved!");
            if let (Some(preview), Some(tag_text)) = (config.preview, response.tag_text) {
                preview.set(tag_text);
            }
        }
        Ok(response) => {
            ctx.messages.error(format!(
                "Failed to update tag order: {}",
                response.error.unwrap_or_default()
            ));
        }
        Err(err) => {
            ctx.messages.error(format!("Request failed: {err}"));
        }
    }
}

/// Identifier sequence for a list, read from its rows top-to-bottom.
/// None when the container is not in the page.
fn collect_tag_order(list_id: &str) -> Option<Vec<String>> {
    let document = web_sys::window()?.document()?;
    let list = document.get_element_by_id(list_id)?;
    let rows = list.query_selector_all(".tag").ok()?;

    let mut values = Vec::new();
    for index in 0..rows.length() {
        let value = rows
            .item(index)
            .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
            .and_then(|row| {
                row.query_selector(&format!("input[name=\"{ROW_ID_INPUT}\"]"))
                    .ok()
                    .flatten()
            })
            .and_then(|input| input.dyn_into::<web_sys::HtmlInputElement>().ok())
            .map(|input| input.value());
        values.push(value);
    }
    Some(order_from_values(values))
}

/// Rows without an identifier input contribute nothing to the sequence
fn order_from_values(values: Vec<Option<String>>) -> Vec<String> {
    values.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_keeps_row_sequence() {
        let values = vec![
            Some("3".to_string()),
            Some("1".to_string()),
            Some("2".to_string()),
        ];
        assert_eq!(order_from_values(values), vec!["3", "1", "2"]);
    }

    #[test]
    fn rows_without_identifier_are_skipped() {
        // 3 rows where the middle one lacks the input yield a 2-element order
        let values = vec![Some("a".to_string()), None, Some("b".to_string())];
        assert_eq!(order_from_values(values), vec!["a", "b"]);
        assert!(order_from_values(vec![None, None]).is_empty());
        assert!(order_from_values(vec![]).is_empty());
    }

    #[test]
    fn standard_configs_route_to_their_endpoints() {
        let config = tg_list_config();
        assert_eq!(config.list_id, TG_TAG_LIST_ID);
        assert_eq!((config.endpoint)(7), "/posts/api/tg/7/reorder_tags");
        assert!(config.preview.is_none());
    }
}
