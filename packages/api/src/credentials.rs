//! Bearer-token sources for [`crate::HttpBackend`].
//!
//! The adapter never reaches for browser storage itself; it is handed a
//! [`CredentialProvider`] when it is built.

use std::sync::{Arc, Mutex, PoisonError};

/// Supplies the token attached to outbound requests.
pub trait CredentialProvider {
    fn token(&self) -> Option<String>;
    fn set_token(&self, token: &str);
    /// Forget the stored token (called after a 401).
    fn clear(&self);
}

/// Token held in process memory. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryCredentials {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Arc::new(Mutex::new(Some(token.into()))),
        }
    }
}

impl CredentialProvider for MemoryCredentials {
    fn token(&self) -> Option<String> {
        self.token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_token(&self, token: &str) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// Token stored in the browser's `localStorage` under a configurable key.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Debug, PartialEq)]
pub struct LocalStorageCredentials {
    key: String,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorageCredentials {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl CredentialProvider for LocalStorageCredentials {
    fn token(&self) -> Option<String> {
        Self::storage()?
            .get_item(&self.key)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }

    fn set_token(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(&self.key, token).is_err() {
                tracing::warn!(key = %self.key, "could not persist auth token");
            }
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            if storage.remove_item(&self.key).is_err() {
                tracing::warn!(key = %self.key, "could not clear auth token");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_credentials_shared_between_clones() {
        let creds = MemoryCredentials::new();
        let other = creds.clone();
        assert!(creds.token().is_none());

        other.set_token("abc");
        assert_eq!(creds.token().as_deref(), Some("abc"));

        creds.clear();
        assert!(other.token().is_none());
    }
}
