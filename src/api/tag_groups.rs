//! Tag Group Actions
//!
//! Legacy form actions for tag groups, including the cross-copy actions
//! that move a tag set between the opened post and the opened group.

use super::{editor_path, post_form};

pub async fn create_tag_group(name: &str) -> Result<(), String> {
    post_form(&editor_path(None, None), "create_tg", &[("new_item_name", name)]).await
}

pub async fn update_tag_group(tg_id: u32, name: &str) -> Result<(), String> {
    post_form(&editor_path(None, Some(tg_id)), "update_tg", &[("tg_name", name)]).await
}

pub async fn delete_tag_group(tg_id: u32) -> Result<(), String> {
    post_form(&editor_path(None, Some(tg_id)), "delete_tg", &[]).await
}

/// Append the opened post's tags to the opened tag group
pub async fn copy_tags_to_tg(post_id: u32, tg_id: u32) -> Result<(), String> {
    post_form(&editor_path(Some(post_id), Some(tg_id)), "copy_tags_to_tg", &[]).await
}

/// Append the opened tag group's tags to the opened post
pub async fn copy_tags_to_post(post_id: u32, tg_id: u32) -> Result<(), String> {
    post_form(&editor_path(Some(post_id), Some(tg_id)), "copy_tags_to_post", &[]).await
}
