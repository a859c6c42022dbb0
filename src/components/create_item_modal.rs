//! Create Item Dialog
//!
//! One dialog for creating posts and tag groups, parameterized by item kind.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::modal::{Modal, ModalState};
use crate::context::AppContext;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
    Post,
    TagGroup,
}

impl ItemKind {
    pub fn heading(self) -> &'static str {
        match self {
            ItemKind::Post => "Create Post",
            ItemKind::TagGroup => "Create TagGroup",
        }
    }

    fn label(self) -> &'static str {
        match self {
            ItemKind::Post => "Post",
            ItemKind::TagGroup => "TagGroup",
        }
    }
}

/// Dialog state: open/close plus the kind being created
#[derive(Clone, Copy)]
pub struct CreateDialog {
    pub modal: ModalState,
    kind: RwSignal<ItemKind>,
}

impl CreateDialog {
    pub fn new() -> Self {
        Self {
            modal: ModalState::new(),
            kind: RwSignal::new(ItemKind::Post),
        }
    }

    pub fn request(&self, kind: ItemKind) {
        self.kind.set(kind);
        self.modal.show();
    }
}

impl Default for CreateDialog {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn CreateItemModal(dialog: CreateDialog) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (name, set_name) = signal(String::new());

    let confirm = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let item_name = name.get().trim().to_string();
        if item_name.is_empty() {
            return;
        }
        let kind = dialog.kind.get();

        spawn_local(async move {
            let result = match kind {
                ItemKind::Post => api::create_post(&item_name).await,
                ItemKind::TagGroup => api::create_tag_group(&item_name).await,
            };
            match result {
                Ok(()) => {
                    ctx.messages.success(format!("New {} {} created", kind.label(), item_name));
                    set_name.set(String::new());
                    dialog.modal.hide();
                    ctx.reload();
                }
                Err(err) => ctx.messages.error(format!("Request failed: {err}")),
            }
        });
    };

    view! {
        <Modal state=dialog.modal>
            <div class="modal-text">{move || dialog.kind.get().heading()}</div>
            <form class="modal-form" on:submit=confirm>
                <input
                    type="text"
                    placeholder="Name..."
                    prop:value=move || name.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_name.set(input.value());
                    }
                />
                <div class="modal-buttons">
                    <button type="submit" class="modal-confirm-btn">"Create"</button>
                    <button
                        type="button"
                        class="modal-cancel-btn"
                        on:click=move |_| dialog.modal.hide()
                    >
                        "Cancel"
                    </button>
                </div>
            </form>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::ItemKind;

    #[test]
    fn headings_are_per_kind() {
        assert_eq!(ItemKind::Post.heading(), "Create Post");
        assert_eq!(ItemKind::TagGroup.heading(), "Create TagGroup");
    }
}
