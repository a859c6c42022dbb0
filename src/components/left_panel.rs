//! Left Panel Component
//!
//! Posts / tag groups tabs with item lists and create buttons. The selected
//! tab is persisted so the panel reopens where the user left it.

use leptos::prelude::*;

use crate::components::create_item_modal::{CreateDialog, ItemKind};
use crate::context::AppContext;
use crate::storage::{local_get, local_set};
use crate::store::{use_app_store, AppStateStoreFields};

/// Local storage key for the selected tab
const TAB_KEY: &str = "selected_left_tab";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeftTab {
    Posts,
    Groups,
}

impl LeftTab {
    fn as_str(self) -> &'static str {
        match self {
            LeftTab::Posts => "posts",
            LeftTab::Groups => "groups",
        }
    }

    fn from_str(value: &str) -> Option<Self> {
        match value {
            "posts" => Some(LeftTab::Posts),
            "groups" => Some(LeftTab::Groups),
            _ => None,
        }
    }
}

#[component]
pub fn LeftPanel(create_dialog: CreateDialog) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let initial_tab = local_get(TAB_KEY)
        .and_then(|raw| LeftTab::from_str(&raw))
        .unwrap_or(LeftTab::Posts);
    let (tab, set_tab) = signal(initial_tab);

    let select_tab = move |next: LeftTab| {
        set_tab.set(next);
        local_set(TAB_KEY, next.as_str());
    };

    let tab_class = move |own: LeftTab| {
        if tab.get() == own { "left-tab active" } else { "left-tab" }
    };

    view! {
        <div class="left-panel">
            <div class="left-tabs">
                <button class=move || tab_class(LeftTab::Posts) on:click=move |_| select_tab(LeftTab::Posts)>
                    "Posts"
                </button>
                <button class=move || tab_class(LeftTab::Groups) on:click=move |_| select_tab(LeftTab::Groups)>
                    "TagGroups"
                </button>
            </div>

            {move || match tab.get() {
                LeftTab::Posts => view! {
                    <div class="left-list">
                        <For
                            each=move || store.posts().get()
                            key=|post| post.id
                            children=move |post| {
                                let id = post.id;
                                let row_class = move || {
                                    if ctx.current_post.get() == Some(id) {
                                        "left-list-row selected"
                                    } else {
                                        "left-list-row"
                                    }
                                };
                                view! {
                                    <div class=row_class on:click=move |_| ctx.open_post(Some(id))>
                                        {post.title}
                                    </div>
                                }
                            }
                        />
                        <button
                            class="create-item-btn"
                            on:click=move |_| create_dialog.request(ItemKind::Post)
                        >
                            "+ New Post"
                        </button>
                    </div>
                }.into_any(),
                LeftTab::Groups => view! {
                    <div class="left-list">
                        <For
                            each=move || store.tag_groups().get()
                            key=|tg| tg.id
                            children=move |tg| {
                                let id = tg.id;
                                let row_class = move || {
                                    if ctx.current_tg.get() == Some(id) {
                                        "left-list-row selected"
                                    } else {
                                        "left-list-row"
                                    }
                                };
                                view! {
                                    <div class=row_class on:click=move |_| ctx.open_tag_group(Some(id))>
                                        {tg.name}
                                    </div>
                                }
                            }
                        />
                        <button
                            class="create-item-btn"
                            on:click=move |_| create_dialog.request(ItemKind::TagGroup)
                        >
                            "+ New TagGroup"
                        </button>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::LeftTab;

    #[test]
    fn tab_storage_round_trip() {
        for tab in [LeftTab::Posts, LeftTab::Groups] {
            assert_eq!(LeftTab::from_str(tab.as_str()), Some(tab));
        }
        assert_eq!(LeftTab::from_str("other"), None);
    }
}
