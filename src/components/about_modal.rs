//! About Dialog

use leptos::prelude::*;

use crate::components::modal::{Modal, ModalState};

#[component]
pub fn AboutModal(state: ModalState) -> impl IntoView {
    view! {
        <Modal state=state>
            <div class="modal-text">"About TagPost"</div>
            <p class="about-body">
                "Compose posts, attach hashtags, and drag them into the order "
                "you want them published in. Tag groups hold reusable tag sets "
                "you can copy onto any post."
            </p>
            <div class="modal-buttons">
                <button class="modal-cancel-btn" on:click=move |_| state.hide()>"Close"</button>
            </div>
        </Modal>
    }
}
