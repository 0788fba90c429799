//! Collaborator access through context.
//!
//! [`ServicesProvider`] builds one [`HttpBackend`] from the client configuration;
//! views pick it up with [`use_backend`] instead of constructing their own.
//! [`load_config`] reads the configuration for the current platform.

use api::{Gateway, HttpBackend};
use dioxus::prelude::*;
use store::ClientConfig;

/// Client configuration for this platform.
///
/// Native builds read `<config_dir>/celebconnect/config.toml`; WASM uses the
/// defaults plus build-time overrides.
pub fn load_config() -> ClientConfig {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let path = dirs::config_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("celebconnect")
            .join("config.toml");
        ClientConfig::load_file(&path)
    }
    #[cfg(target_arch = "wasm32")]
    {
        ClientConfig::load()
    }
}

pub fn use_backend() -> HttpBackend {
    use_context::<HttpBackend>()
}

pub fn use_config() -> ClientConfig {
    use_context::<ClientConfig>()
}

#[component]
pub fn ServicesProvider(config: ClientConfig, children: Element) -> Element {
    let config = use_context_provider(|| config);
    use_context_provider(|| {
        tracing::info!("Using API at {}", config.api.base_url);
        HttpBackend::new(Gateway::from_config(&config.api))
    });

    rsx! {
        {children}
    }
}
