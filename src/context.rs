//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::notify::Messages;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to refetch editor state from the server - read
    pub reload_trigger: ReadSignal<u32>,
    set_reload_trigger: WriteSignal<u32>,
    /// Currently opened post - read
    pub current_post: ReadSignal<Option<u32>>,
    set_current_post: WriteSignal<Option<u32>>,
    /// Currently opened tag group - read
    pub current_tg: ReadSignal<Option<u32>>,
    set_current_tg: WriteSignal<Option<u32>>,
    /// Transient message area
    pub messages: Messages,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        current_post: (ReadSignal<Option<u32>>, WriteSignal<Option<u32>>),
        current_tg: (ReadSignal<Option<u32>>, WriteSignal<Option<u32>>),
        messages: Messages,
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            current_post: current_post.0,
            set_current_post: current_post.1,
            current_tg: current_tg.0,
            set_current_tg: current_tg.1,
            messages,
        }
    }

    /// Trigger a refetch of editor state
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Open a post in the editor (None closes it)
    pub fn open_post(&self, post_id: Option<u32>) {
        self.set_current_post.set(post_id);
    }

    /// Open a tag group in the editor (None closes it)
    pub fn open_tag_group(&self, tg_id: Option<u32>) {
        self.set_current_tg.set(tg_id);
    }
}
