use dioxus::prelude::*;

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card triggers `on_close` unless `locked` is set.
#[component]
pub fn ModalOverlay(
    on_close: EventHandler<()>,
    /// Ignore outside clicks, e.g. while a request is in flight.
    #[props(default)]
    locked: bool,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| {
                if !locked {
                    on_close.call(());
                }
            },
            div {
                class: "modal-card",
                role: "dialog",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}
