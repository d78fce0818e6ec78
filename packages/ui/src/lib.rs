//! This crate contains all shared UI for the workspace.
//!
//! Views read and write `store` state machines held in signals and reach the
//! backend through the context installed by [`BackendProvider`].

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod backend;
pub use backend::{build_backend, use_backend, AppBackend, AppCredentials, BackendProvider};

pub mod views;
pub use views::{ConfirmDeleteDialog, FormModalView, ModalOverlay, ResourcePanel, ResourceTable};

mod navbar;
pub use navbar::Navbar;

pub const DASHBOARD_CSS: Asset = asset!("/assets/dashboard.css");
