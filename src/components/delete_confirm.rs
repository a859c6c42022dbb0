//! Delete Confirmation Dialog
//!
//! Destructive actions go through an explicit confirm step. The dialog owns
//! its pending target; delete buttons call `request` and nothing happens
//! until the user confirms.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::modal::{Modal, ModalState};
use crate::context::AppContext;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteTarget {
    Post(u32),
    TagGroup(u32),
}

/// Dialog state: open/close plus the entity awaiting confirmation
#[derive(Clone, Copy)]
pub struct DeleteDialog {
    pub modal: ModalState,
    target: RwSignal<Option<DeleteTarget>>,
}

impl DeleteDialog {
    pub fn new() -> Self {
        Self {
            modal: ModalState::new(),
            target: RwSignal::new(None),
        }
    }

    pub fn request(&self, target: DeleteTarget) {
        self.target.set(Some(target));
        self.modal.show();
    }
}

impl Default for DeleteDialog {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn DeleteConfirmModal(dialog: DeleteDialog) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let prompt = move || match dialog.target.get() {
        Some(DeleteTarget::Post(_)) => "Delete this post?",
        Some(DeleteTarget::TagGroup(_)) => "Delete this tag group?",
        None => "",
    };

    let cancel = move |_| {
        dialog.target.set(None);
        dialog.modal.hide();
    };

    let confirm = move |_| {
        let target = dialog.target.get_untracked();
        dialog.target.set(None);
        dialog.modal.hide();
        let Some(target) = target else { return };

        spawn_local(async move {
            let result = match target {
                DeleteTarget::Post(id) => api::delete_post(id).await,
                DeleteTarget::TagGroup(id) => api::delete_tag_group(id).await,
            };
            match result {
                Ok(()) => {
                    match target {
                        DeleteTarget::Post(_) => {
                            ctx.open_post(None);
                            ctx.messages.success("Post deleted");
                        }
                        DeleteTarget::TagGroup(_) => {
                            ctx.open_tag_group(None);
                            ctx.messages.success("TagGroup deleted");
                        }
                    }
                    ctx.reload();
                }
                Err(err) => ctx.messages.error(format!("Request failed: {err}")),
            }
        });
    };

    view! {
        <Modal state=dialog.modal>
            <div class="modal-text">{prompt}</div>
            <div class="modal-buttons">
                <button class="modal-confirm-btn danger" on:click=confirm>"Delete"</button>
                <button class="modal-cancel-btn" on:click=cancel>"Cancel"</button>
            </div>
        </Modal>
    }
}
