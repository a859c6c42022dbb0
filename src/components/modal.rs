//! Modal Dialog Primitives
//!
//! Generic modal with backdrop. Each dialog owns its open/close state as an
//! explicit per-instance record; nothing is shared across dialogs.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Open/close state owned by one dialog instance
#[derive(Clone, Copy)]
pub struct ModalState {
    open: ReadSignal<bool>,
    set_open: WriteSignal<bool>,
}

impl ModalState {
    pub fn new() -> Self {
        let (open, set_open) = signal(false);
        Self { open, set_open }
    }

    pub fn show(&self) {
        self.set_open.set(true);
    }

    pub fn hide(&self) {
        self.set_open.set(false);
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    fn is_open_untracked(&self) -> bool {
        self.open.get_untracked()
    }
}

impl Default for ModalState {
    fn default() -> Self {
        Self::new()
    }
}

/// Escape closes the dialog, like clicking the backdrop
fn bind_escape_close(state: ModalState) {
    use wasm_bindgen::closure::Closure;

    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" && state.is_open_untracked() {
            state.hide();
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
        }
    }
    on_keydown.forget();
}

/// Modal window over a dimmed backdrop.
///
/// Mousedown on the backdrop closes; the window itself swallows it.
#[component]
pub fn Modal(state: ModalState, children: Children) -> impl IntoView {
    bind_escape_close(state);

    view! {
        <div
            class="modal-bg"
            style=move || if state.is_open() { "display: flex;" } else { "display: none;" }
            on:mousedown=move |_| state.hide()
        >
            <div
                class="modal-window"
                on:mousedown=move |ev: web_sys::MouseEvent| ev.stop_propagation()
            >
                {children()}
            </div>
        </div>
    }
}
