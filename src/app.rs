//! TagPost Frontend App
//!
//! Main application component: three-block layout with the posts/groups
//! panel, the editors, and the preview, plus the app-level dialogs.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{
    AboutModal, CreateDialog, CreateItemModal, DeleteConfirmModal, DeleteDialog, LeftPanel,
    ModalState, PostEditor, PreviewPanel, TagGroupEditor, TitleBar,
};
use crate::context::AppContext;
use crate::models::format_tag_line;
use crate::notify::{MessageArea, Messages};
use crate::storage::{local_get, local_set};
use crate::store::{store_apply_state, store_post, store_tag_group, AppState};
use crate::theme;

/// Local storage key for preview visibility (mobile layout)
const PREVIEW_KEY: &str = "preview";

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::default());
    provide_context(store);

    let messages = Messages::new();
    provide_context(messages);

    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (current_post, set_current_post) = signal::<Option<u32>>(None);
    let (current_tg, set_current_tg) = signal::<Option<u32>>(None);

    let ctx = AppContext::new(
        (reload_trigger, set_reload_trigger),
        (current_post, set_current_post),
        (current_tg, set_current_tg),
        messages,
    );
    provide_context(ctx);

    // Theme: applied to <body>, persisted on change
    let (theme, set_theme) = signal(theme::load());
    Effect::new(move |_| {
        let current = theme.get();
        theme::apply(current);
        theme::save(current);
    });

    // Mobile layout toggles
    let menu_open = RwSignal::new(false);
    let preview_visible = RwSignal::new(local_get(PREVIEW_KEY).as_deref() == Some("true"));
    let toggle_preview = move |_: ()| {
        preview_visible.update(|visible| *visible = !*visible);
        local_set(
            PREVIEW_KEY,
            if preview_visible.get_untracked() { "true" } else { "false" },
        );
    };

    // Preview tag line, overwritten by the reorder controller on success
    let (preview_tags, set_preview_tags) = signal(String::new());

    // Selection comes from the server on first load only
    let (restored, set_restored) = signal(false);

    // Load editor state on mount and whenever the trigger changes
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        spawn_local(async move {
            match api::fetch_editor_state().await {
                Ok(state) => {
                    web_sys::console::log_1(
                        &format!(
                            "[APP] Loaded {} posts, {} tag groups, trigger={}",
                            state.posts.len(),
                            state.tag_groups.len(),
                            trigger
                        )
                        .into(),
                    );
                    if !restored.get_untracked() {
                        set_restored.set(true);
                        ctx.open_post(state.opened_post);
                        ctx.open_tag_group(state.opened_tg);
                    }
                    store_apply_state(&store, state);
                }
                Err(err) => ctx.messages.error(format!("Request failed: {err}")),
            }
        });
    });

    // Opened entities
    let post = Memo::new(move |_| current_post.get().and_then(|id| store_post(&store, id)));
    let tag_group = Memo::new(move |_| current_tg.get().and_then(|id| store_tag_group(&store, id)));

    // Client-rendered tag line until the server sends an authoritative one
    Effect::new(move |_| {
        let line = post.get().map(|post| format_tag_line(&post.tags)).unwrap_or_default();
        set_preview_tags.set(line);
    });

    // Live description text, shared by the editor and the preview
    let desc_draft = RwSignal::new(String::new());

    // Dialogs: each owns its own state
    let about = ModalState::new();
    let create_dialog = CreateDialog::new();
    let delete_dialog = DeleteDialog::new();

    view! {
        <TitleBar
            theme=theme
            set_theme=set_theme
            about=about
            menu_open=menu_open
            preview_visible=preview_visible
            on_preview_toggle=toggle_preview
        />
        <MessageArea />

        <div class="app-layout">
            <div class="app-block-l" class:visible=move || menu_open.get()>
                <LeftPanel create_dialog=create_dialog />
            </div>

            <main class="app-block-c">
                <PostEditor
                    post=post
                    desc_draft=desc_draft
                    set_preview_tags=set_preview_tags
                    delete_dialog=delete_dialog
                />
                <TagGroupEditor tag_group=tag_group delete_dialog=delete_dialog />
                {move || (post.get().is_none() && tag_group.get().is_none()).then(|| view! {
                    <p class="empty-hint">"Open a post from the list, or create one to start."</p>
                })}
            </main>

            <div class="app-block-r">
                <PreviewPanel
                    desc_draft=desc_draft
                    preview_tags=preview_tags
                    visible=preview_visible
                />
            </div>
        </div>

        <AboutModal state=about />
        <CreateItemModal dialog=create_dialog />
        <DeleteConfirmModal dialog=delete_dialog />
    }
}
