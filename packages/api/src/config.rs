//! # Dashboard configuration — `dashboard.toml`
//!
//! ```toml
//! [api]
//! base_url = "/api"        # absolute URL, or a path resolved against the page origin
//!
//! [auth]
//! token_key = "authToken"  # localStorage key holding the bearer token
//! ```
//!
//! Every section and key is optional; a missing file or an empty one is equivalent to
//! [`DashboardConfig::default`].

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid dashboard config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("could not write dashboard config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Top-level configuration stored in `dashboard.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Where the REST backend lives.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_token_key")]
    pub token_key: String,
}

fn default_base_url() -> String {
    "/api".to_string()
}

fn default_token_key() -> String {
    "authToken".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_key: default_token_key(),
        }
    }
}

impl ApiConfig {
    /// Turn a relative base path into an absolute URL using the page origin.
    /// Absolute URLs, or a missing origin, leave the base untouched.
    pub fn resolve_base_url(&self, origin: Option<&str>) -> String {
        let base = self.base_url.trim_end_matches('/');
        if base.starts_with("http://") || base.starts_with("https://") {
            return base.to_string();
        }
        match origin {
            Some(origin) => {
                let origin = origin.trim_end_matches('/');
                let path = base.trim_start_matches('/');
                if path.is_empty() {
                    origin.to_string()
                } else {
                    format!("{origin}/{path}")
                }
            }
            None => base.to_string(),
        }
    }
}

impl DashboardConfig {
    /// Builder method to point at another backend.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "dashboard.toml"
    }

    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
