//! The tables page: one panel per managed entity.

use api::{AboutUs, Feature, Hero, Testimonial, User};
use dioxus::prelude::*;
use ui::ResourcePanel;

#[component]
pub fn Tables() -> Element {
    rsx! {
        main {
            class: "page",
            ResourcePanel::<User> {}
            ResourcePanel::<Hero> {}
            ResourcePanel::<Feature> {}
            ResourcePanel::<Testimonial> {}
            ResourcePanel::<AboutUs> {}
        }
    }
}
