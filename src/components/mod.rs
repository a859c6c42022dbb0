//! UI Components
//!
//! Reusable Leptos components.

mod about_modal;
mod create_item_modal;
mod delete_confirm;
mod left_panel;
mod modal;
mod post_editor;
mod preview_panel;
mod tag_group_editor;
mod tag_list;
mod title_bar;

pub use about_modal::AboutModal;
pub use create_item_modal::{CreateDialog, CreateItemModal, ItemKind};
pub use delete_confirm::{DeleteConfirmModal, DeleteDialog, DeleteTarget};
pub use left_panel::LeftPanel;
pub use modal::{Modal, ModalState};
pub use post_editor::PostEditor;
pub use preview_panel::PreviewPanel;
pub use tag_group_editor::TagGroupEditor;
pub use tag_list::{SortableTagList, TagListConfig, POST_TAG_LIST_ID, TG_TAG_LIST_ID};
pub use title_bar::TitleBar;
