use dioxus::prelude::*;

/// Top bar. Platform packages pass their router links as children.
#[component]
pub fn Navbar(#[props(default = "Dashboard".to_string())] brand: String, children: Element) -> Element {
    rsx! {
        nav {
            class: "navbar",
            span { class: "navbar-brand", "{brand}" }
            div {
                class: "navbar-links",
                {children}
            }
        }
    }
}
