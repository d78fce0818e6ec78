//! # Store crate — dashboard state, independent of any UI framework
//!
//! Each type here is a small state machine the views drive with user events and
//! backend results. Long-running steps are split into `begin_*` (synchronous,
//! returns what to send) and `finish_*` (applies the result), so a reactive UI can
//! release its state lock while the request is in flight. Async shortcuts that run
//! both halves against a [`api::Backend`] exist for non-UI callers and tests.
//!
//! | Type | Owns |
//! |------|------|
//! | [`ResourceController`] | The authoritative list for one entity, loading/error flags, edit selection, delete flow |
//! | [`FormModal`] | A draft entity, validation, the saving flag and the error line of an add/edit dialog |
//! | [`ConfirmDialog`] | The entity awaiting delete confirmation |
//! | [`RegisterForm`] | The sign-up form |
//! | [`table`] | Pure mapping from a controller's items to row view models |

pub mod controller;
pub mod dialog;
pub mod form;
pub mod register;
pub mod table;

pub use controller::{Reconcile, ResourceController};
pub use dialog::ConfirmDialog;
pub use form::{FormModal, Saved, Submission};
pub use register::RegisterForm;
pub use table::{rows, Cell, RowView, Tabular, Tone};
