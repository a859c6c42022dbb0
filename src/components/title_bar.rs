//! Title Bar Component
//!
//! App name plus the global toggles: theme, about dialog, and the mobile
//! layout switches for the posts menu and the preview block.

use leptos::prelude::*;

use crate::components::modal::ModalState;
use crate::theme::Theme;

#[component]
pub fn TitleBar(
    theme: ReadSignal<Theme>,
    set_theme: WriteSignal<Theme>,
    about: ModalState,
    menu_open: RwSignal<bool>,
    preview_visible: RwSignal<bool>,
    #[prop(into)] on_preview_toggle: Callback<()>,
) -> impl IntoView {
    let toggle_theme = move |_| {
        set_theme.update(|theme| *theme = theme.toggled());
    };

    view! {
        <header class="title-bar">
            <span class="title-bar-name">"TagPost"</span>

            <button
                class="mobile-posts-toggle"
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                {move || if menu_open.get() { "< Back" } else { "Posts" }}
            </button>

            <div class="title-bar-controls">
                <button
                    class=move || if preview_visible.get() { "preview-toggle active" } else { "preview-toggle" }
                    on:click=move |_| on_preview_toggle.run(())
                >
                    "Preview"
                </button>
                <button class="about-btn" on:click=move |_| about.show()>"About"</button>
                <button class="theme-toggle-btn" on:click=toggle_theme>
                    <span class="theme-label">{move || theme.get().icon()}</span>
                </button>
            </div>
        </header>
    }
}
