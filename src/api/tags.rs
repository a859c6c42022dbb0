//! Tag Actions
//!
//! Attach/detach form actions and the JSON reorder commit.

use crate::models::{ReorderRequest, ReorderResponse};

use super::{editor_path, post_form, post_json};

/// Attach tags to a post from a raw input string; the server splits on
/// commas, whitespace and `#`, creating tags that don't exist yet.
pub async fn attach_post_tags(post_id: u32, raw: &str) -> Result<(), String> {
    post_form(
        &editor_path(Some(post_id), None),
        "post_attach_tags",
        &[("tags_to_attach", raw)],
    )
    .await
}

pub async fn attach_tg_tags(tg_id: u32, raw: &str) -> Result<(), String> {
    post_form(
        &editor_path(None, Some(tg_id)),
        "tg_attach_tags",
        &[("tags_to_attach", raw)],
    )
    .await
}

pub async fn detach_post_tag(post_id: u32, tag_id: u32) -> Result<(), String> {
    post_form(
        &editor_path(Some(post_id), None),
        "post_detach_tag",
        &[("tag_to_detach", &tag_id.to_string())],
    )
    .await
}

pub async fn detach_tg_tag(tg_id: u32, tag_id: u32) -> Result<(), String> {
    post_form(
        &editor_path(None, Some(tg_id)),
        "tg_detach_tag",
        &[("tag_to_detach", &tag_id.to_string())],
    )
    .await
}

/// Commit a new tag order. Exactly one request per drag end; the endpoint is
/// built by the list's configuration from its owner id.
pub async fn reorder_tags(endpoint: &str, tag_order: &[String]) -> Result<ReorderResponse, String> {
    post_json(endpoint, &ReorderRequest { tag_order }).await
}
