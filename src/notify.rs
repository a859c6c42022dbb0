//! Transient Messages
//!
//! Toast-style notifications appended to a message area and auto-dismissed.

use std::sync::atomic::{AtomicU32, Ordering};

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a message stays visible
pub const MESSAGE_TIMEOUT_MS: u32 = 2000;

static NEXT_MESSAGE_ID: AtomicU32 = AtomicU32::new(0);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn class(self) -> &'static str {
        match self {
            MessageKind::Success => "message success",
            MessageKind::Error => "message error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub id: u32,
    pub text: String,
    pub kind: MessageKind,
}

/// Handle to the message area, provided via context
#[derive(Clone, Copy)]
pub struct Messages {
    pub entries: ReadSignal<Vec<Message>>,
    set_entries: WriteSignal<Vec<Message>>,
}

impl Messages {
    pub fn new() -> Self {
        let (entries, set_entries) = signal(Vec::new());
        Self { entries, set_entries }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(text.into(), MessageKind::Success);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(text.into(), MessageKind::Error);
    }

    fn push(&self, text: String, kind: MessageKind) {
        let id = NEXT_MESSAGE_ID.fetch_add(1, Ordering::Relaxed);
        self.set_entries.update(|entries| entries.push(Message { id, text, kind }));

        let set_entries = self.set_entries;
        spawn_local(async move {
            TimeoutFuture::new(MESSAGE_TIMEOUT_MS).await;
            set_entries.update(|entries| entries.retain(|message| message.id != id));
        });
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::new()
    }
}

/// Banner area rendering the current messages
#[component]
pub fn MessageArea() -> impl IntoView {
    let messages = use_context::<Messages>().expect("Messages should be provided");

    view! {
        <div class="message-area">
            <For
                each=move || messages.entries.get()
                key=|message| message.id
                children=move |message| {
                    view! {
                        <div class=message.kind.class()>{message.text}</div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::MessageKind;

    #[test]
    fn kinds_map_to_distinct_classes() {
        assert_eq!(MessageKind::Success.class(), "message success");
        assert_eq!(MessageKind::Error.class(), "message error");
    }
}
