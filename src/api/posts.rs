//! Post Actions
//!
//! Legacy form actions for creating and editing posts.

use super::{editor_path, post_form};

pub async fn create_post(title: &str) -> Result<(), String> {
    post_form(&editor_path(None, None), "create_post", &[("new_item_name", title)]).await
}

pub async fn update_post_title(post_id: u32, title: &str) -> Result<(), String> {
    post_form(
        &editor_path(Some(post_id), None),
        "update_post_title",
        &[("post_title", title)],
    )
    .await
}

pub async fn update_post_desc(post_id: u32, desc: &str) -> Result<(), String> {
    post_form(
        &editor_path(Some(post_id), None),
        "update_post_desc",
        &[("post_desc", desc)],
    )
    .await
}

pub async fn delete_post(post_id: u32) -> Result<(), String> {
    post_form(&editor_path(Some(post_id), None), "delete_post", &[]).await
}
