//! # Dashboard user accounts
//!
//! A [`User`] is both the row shown in the users table and the body sent when an
//! account is created or edited. Two fields are one-directional:
//!
//! - `password` is only ever sent on create. Edit drafts start with it blank and
//!   [`Resource::prepare`] clears it again before an update goes out.
//! - `password_hash` is assigned by the server. It is never sent on create, and an
//!   update echoes back the hash the server gave us so the stored password survives.
//!
//! `user_type` is free text ("Admin", "Editor", ...) and defaults to `"User"` when a
//! new account is created without one. `status` is read-only: it is rendered as a
//! badge and stripped from every outgoing body.

use serde::{Deserialize, Serialize};

use super::lenient;
use super::resource::{FieldKind, FieldSpec, FormMode, Resource};
use super::EntityId;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub user_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty", deserialize_with = "lenient::text")]
    pub password: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::optional_text"
    )]
    pub password_hash: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::optional_text"
    )]
    pub status: Option<String>,
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("name", "Name", FieldKind::Text),
    FieldSpec::new("email", "Email", FieldKind::Email),
    FieldSpec::new("password", "Password", FieldKind::Password).create_only(),
    FieldSpec::new("userType", "User Type", FieldKind::Text)
        .optional()
        .placeholder("Admin, Editor, User..."),
];

impl User {
    /// Whether the account is marked active by the server.
    pub fn is_active(&self) -> bool {
        self.status.as_deref() == Some("active")
    }
}

impl Resource for User {
    const PATH: &'static str = "/users";
    const NOUN: &'static str = "user";
    const PLURAL: &'static str = "users";
    const TITLE: &'static str = "Users";
    const FIELDS: &'static [FieldSpec] = FIELDS;
    const CONFLICT_MESSAGE: Option<&'static str> = Some("A user with this email already exists.");

    fn id(&self) -> Option<&EntityId> {
        self.id.as_ref()
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(&self.name),
            "email" => Some(&self.email),
            "password" => Some(&self.password),
            "userType" => Some(&self.user_type),
            _ => None,
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "name" => Some(&mut self.name),
            "email" => Some(&mut self.email),
            "password" => Some(&mut self.password),
            "userType" => Some(&mut self.user_type),
            _ => None,
        }
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn required_message(mode: FormMode) -> &'static str {
        match mode {
            FormMode::Create => "Name, email and password are required",
            FormMode::Edit => "Name and email are required",
        }
    }

    fn edit_draft(&self) -> Self {
        Self {
            password: String::new(),
            ..self.clone()
        }
    }

    fn prepare(&mut self, mode: FormMode) {
        match mode {
            FormMode::Create => {
                if self.user_type.is_empty() {
                    self.user_type = "User".to_string();
                }
                self.password_hash = None;
            }
            FormMode::Edit => self.password.clear(),
        }
        self.status = None;
    }
}
