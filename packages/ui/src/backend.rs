//! Backend context for the views.

use api::{DashboardConfig, HttpBackend};
use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
pub type AppCredentials = api::LocalStorageCredentials;
#[cfg(not(target_arch = "wasm32"))]
pub type AppCredentials = api::MemoryCredentials;

/// The backend every panel talks to.
pub type AppBackend = HttpBackend<AppCredentials>;

/// Get the shared backend. Must be called below a [`BackendProvider`].
pub fn use_backend() -> AppBackend {
    use_context::<AppBackend>()
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
fn credentials(config: &DashboardConfig) -> AppCredentials {
    api::LocalStorageCredentials::new(config.auth.token_key.clone())
}

#[cfg(not(target_arch = "wasm32"))]
fn credentials(_config: &DashboardConfig) -> AppCredentials {
    api::MemoryCredentials::new()
}

pub fn build_backend(config: &DashboardConfig) -> AppBackend {
    let base_url = config.api.resolve_base_url(page_origin().as_deref());
    tracing::info!(%base_url, "backend configured");
    HttpBackend::new(base_url, credentials(config))
}

/// Builds the [`AppBackend`] once from `config` and shares it with its children.
#[component]
pub fn BackendProvider(config: DashboardConfig, children: Element) -> Element {
    use_context_provider(|| build_backend(&config));

    rsx! {
        {children}
    }
}
