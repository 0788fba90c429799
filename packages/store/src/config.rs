//! # Client configuration
//!
//! Defines where the collaborator services live and the few knobs the flows need.
//! The configuration is deliberately flat so that a TOML file, compile-time
//! environment overrides and the defaults all describe the same shape.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:3001"   # every relative request path is resolved against this
//!
//! [fan]
//! email_domain = "fanmail.com"         # placeholder email domain used at registration
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config. TOML (de)serialisation, builder helpers, [`ClientConfig::load`] and [`ClientConfig::load_file`]. |
//! | [`ApiConfig`] | Base URL for the API Request Gateway. |
//! | [`FanConfig`] | Registration details that are deployment-specific. |
//!
//! All structs derive `Default` so that a missing or empty file is equivalent to the
//! default configuration.
//!
//! ## Sources
//!
//! Native builds read `config.toml` with [`ClientConfig::load_file`]; callers
//! usually pass `dirs::config_dir()/celebconnect/config.toml`. The WASM bundle has
//! no filesystem and uses [`ClientConfig::load`].
//!
//! Both then apply `CELEBCONNECT_API_URL` and `CELEBCONNECT_FAN_EMAIL_DOMAIN`,
//! captured at **compile time** via `option_env!`, on top of the file or defaults.

use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Top-level client configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub fan: FanConfig,
}

/// Where the collaborator services are reachable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Prefix for every root-relative request path.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:3001".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Fan registration configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FanConfig {
    /// Domain of the placeholder email created for new fan profiles.
    #[serde(default = "default_email_domain")]
    pub email_domain: String,
}

fn default_email_domain() -> String {
    "fanmail.com".to_string()
}

impl Default for FanConfig {
    fn default() -> Self {
        Self {
            email_domain: default_email_domain(),
        }
    }
}

impl ClientConfig {
    /// Create a config pointing at the given API base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
            },
            fan: FanConfig::default(),
        }
    }

    /// Builder method to set the placeholder email domain.
    pub fn with_email_domain(mut self, domain: impl Into<String>) -> Self {
        self.fan.email_domain = domain.into();
        self
    }

    /// Defaults plus compile-time environment overrides.
    pub fn load() -> Self {
        Self::default().with_build_overrides()
    }

    /// The TOML file at `path` plus compile-time environment overrides.
    ///
    /// A missing file reads as the defaults. An unreadable or malformed file is
    /// logged and also falls back to the defaults.
    pub fn load_file(path: &Path) -> Self {
        let base = match std::fs::read_to_string(path) {
            Ok(text) => Self::from_toml(&text).unwrap_or_else(|e| {
                tracing::warn!("Ignoring malformed config {}: {e}", path.display());
                Self::default()
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Self::default(),
            Err(e) => {
                tracing::warn!("Failed to read config {}: {e}", path.display());
                Self::default()
            }
        };
        base.with_build_overrides()
    }

    fn with_build_overrides(self) -> Self {
        self.with_overrides(
            option_env!("CELEBCONNECT_API_URL"),
            option_env!("CELEBCONNECT_FAN_EMAIL_DOMAIN"),
        )
    }

    fn with_overrides(mut self, base_url: Option<&str>, email_domain: Option<&str>) -> Self {
        if let Some(url) = base_url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api.base_url = url.to_string();
        }
        if let Some(domain) = email_domain.map(str::trim).filter(|d| !d.is_empty()) {
            self.fan.email_domain = domain.to_string();
        }
        self
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
