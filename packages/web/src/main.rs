use api::DashboardConfig;
use dioxus::prelude::*;

use ui::{BackendProvider, Navbar};
use views::{SignUp, Tables};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Root {},
        #[route("/tables")]
        Tables {},
        #[route("/sign-up")]
        SignUp {},
}

const CONFIG_TOML: &str = include_str!("../dashboard.toml");

fn main() {
    dioxus::launch(App);
}

/// Embedded `dashboard.toml`, or the defaults if it does not parse.
fn load_config() -> DashboardConfig {
    match DashboardConfig::from_toml(CONFIG_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Invalid {}, using defaults: {}", DashboardConfig::filename(), e);
            DashboardConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::DASHBOARD_CSS }

        BackendProvider {
            config,
            Router::<Route> {}
        }
    }
}

#[component]
fn Shell() -> Element {
    rsx! {
        Navbar {
            Link { to: Route::Tables {}, "Tables" }
            Link { to: Route::SignUp {}, "Sign up" }
        }
        Outlet::<Route> {}
    }
}

/// Redirect `/` to `/tables`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Tables {});
    rsx! {}
}
