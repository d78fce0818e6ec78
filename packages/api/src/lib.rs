//! # API crate — the dashboard's view of the content backend
//!
//! Everything the dashboard knows about the REST backend lives here: the wire models
//! for each managed entity, the HTTP adapter that talks to the server, the error
//! taxonomy that turns failures into user-facing text, and the configuration that
//! tells the adapter where the backend is.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | The [`Backend`] trait and the reqwest-backed [`HttpBackend`] |
//! | [`config`] | `dashboard.toml` parsing and base-URL resolution |
//! | [`credentials`] | Bearer-token providers injected into the adapter |
//! | [`crud`] | Typed list/create/update/delete helpers routed through [`Resource::PATH`] |
//! | [`error`] | [`ApiError`], [`ErrorBody`] and the status → message mapping |
//! | [`memory`] | [`MemoryBackend`], an in-process backend for tests |
//! | [`models`] | Users, heroes, features, testimonials, about-us blurbs and the [`Resource`] trait |
//!
//! ## Endpoints
//!
//! | Resource | Collection | Item |
//! |----------|-----------|------|
//! | [`User`] | `/users` | `/users/{id}` |
//! | [`Hero`] | `/hero` | `/hero/{id}` |
//! | [`Feature`] | `/features` | `/features/{id}` |
//! | [`Testimonial`] | `/testimonials` | `/testimonials/{id}` |
//! | [`AboutUs`] | `/aboutus` | `/aboutus/{id}` |
//!
//! Registration posts to `/auth/register` via [`register`].

pub mod client;
pub mod config;
pub mod credentials;
pub mod crud;
pub mod error;
pub mod memory;
pub mod models;

pub use client::{Backend, HttpBackend};
pub use config::{ConfigError, DashboardConfig};
pub use credentials::{CredentialProvider, MemoryCredentials};
#[cfg(target_arch = "wasm32")]
pub use credentials::LocalStorageCredentials;
pub use crud::{create, delete, list, register, update};
pub use error::{Action, ApiError, ErrorBody};
pub use memory::{MemoryBackend, RecordedRequest};
pub use models::{
    AboutUs, EntityId, Feature, FieldKind, FieldSpec, FormMode, Hero, RegisterRequest,
    Requirement, Resource, Testimonial, User, UserRole,
};
