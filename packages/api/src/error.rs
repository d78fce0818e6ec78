//! Failure classification for backend calls.
//!
//! [`ApiError`] separates "no response at all" from "the server answered with an
//! error status". [`ApiError::describe`] renders either into the sentence shown in a
//! form, a table panel or an alert.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Error payload a backend may attach to a 4xx/5xx response.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    /// Validation errors keyed by field name.
    #[serde(default)]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

impl ErrorBody {
    /// Parse a raw response body. Anything that is not the expected JSON object is
    /// kept verbatim as the message.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Self::default();
        }
        if let Ok(body) = serde_json::from_str::<ErrorBody>(trimmed) {
            return body;
        }
        let message = serde_json::from_str::<String>(trimmed).unwrap_or_else(|_| trimmed.to_string());
        Self {
            message: Some(message),
            ..Self::default()
        }
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Render the validation map as `field: first, second; other: ...`.
    pub fn field_errors(&self) -> Option<String> {
        let errors = self.errors.as_ref()?;
        let rendered: Vec<String> = errors
            .iter()
            .filter(|(_, messages)| !messages.is_empty())
            .map(|(field, messages)| format!("{field}: {}", messages.join(", ")))
            .collect();
        if rendered.is_empty() {
            None
        } else {
            Some(rendered.join("; "))
        }
    }

    fn message_or_title(&self) -> Option<String> {
        non_empty(self.message.as_deref()).or_else(|| non_empty(self.title.as_deref()))
    }
}

fn non_empty(text: Option<&str>) -> Option<String> {
    text.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

/// Errors returned by a [`crate::Backend`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// No HTTP response was received.
    #[error("network error: {0}")]
    Network(String),

    #[error("server responded with status {status}")]
    Http { status: u16, body: ErrorBody },

    #[error("could not encode request body: {0}")]
    Encode(String),

    #[error("could not decode response: {0}")]
    Decode(String),
}

/// What the user was trying to do when a call failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Load,
    Create,
    Update,
    Delete,
    Register,
}

impl Action {
    pub fn verb(self) -> &'static str {
        match self {
            Action::Load => "fetch",
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
            Action::Register => "register",
        }
    }
}

impl ApiError {
    pub fn http(status: u16, body: ErrorBody) -> Self {
        ApiError::Http { status, body }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// User-facing text for this failure.
    ///
    /// `noun` names the affected entity ("hero", "users"); `conflict` overrides the
    /// generic 409 sentence for entities with a uniqueness rule.
    pub fn describe(&self, action: Action, noun: &str, conflict: Option<&str>) -> String {
        let generic = format!("Failed to {} {noun}. Please try again.", action.verb());
        match self {
            ApiError::Network(_) => {
                "Unable to reach the server. Please check your connection.".to_string()
            }
            ApiError::Encode(_) | ApiError::Decode(_) => {
                "Unexpected response from the server.".to_string()
            }
            ApiError::Http { status, body } => match status {
                400 => body
                    .field_errors()
                    .or_else(|| body.message_or_title())
                    .unwrap_or_else(|| "Invalid data. Please check all fields.".to_string()),
                401 => "Unauthorized. Please login again.".to_string(),
                404 => format!("{} not found. It may have been deleted.", capitalize(noun)),
                409 => conflict
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("This {noun} conflicts with an existing record.")),
                _ => non_empty(body.message.as_deref())
                    .or_else(|| body.field_errors())
                    .unwrap_or(generic),
            },
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
