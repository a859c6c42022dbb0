//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{EditorState, Post, TagGroup};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All posts of the current user
    pub posts: Vec<Post>,
    /// All tag groups of the current user
    pub tag_groups: Vec<TagGroup>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the store contents with a fresh editor state payload
pub fn store_apply_state(store: &AppStore, state: EditorState) {
    store.posts().set(state.posts);
    store.tag_groups().set(state.tag_groups);
}

/// Look up a post by ID
pub fn store_post(store: &AppStore, post_id: u32) -> Option<Post> {
    store.posts().read().iter().find(|post| post.id == post_id).cloned()
}

/// Look up a tag group by ID
pub fn store_tag_group(store: &AppStore, tg_id: u32) -> Option<TagGroup> {
    store.tag_groups().read().iter().find(|tg| tg.id == tg_id).cloned()
}
