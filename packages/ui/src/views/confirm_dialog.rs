use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};

use super::ModalOverlay;

/// "Confirm Delete" dialog. Both buttons are disabled while the delete runs.
#[component]
pub fn ConfirmDeleteDialog(
    message: String,
    busy: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            locked: busy,
            div {
                class: "modal-body",
                h2 { class: "modal-title", "Confirm Delete" }
                p { class: "modal-text", "{message}" }
                div {
                    class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: busy,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        disabled: busy,
                        onclick: move |_| on_confirm.call(()),
                        if busy { "Deleting..." } else { "Delete" }
                    }
                }
            }
        }
    }
}
