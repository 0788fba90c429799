//! Shared session store constructor for all platforms.
//!
//! Returns the [`store::KeyValueStore`] the session is persisted in:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStore`]
//! - **Native** (tests, tooling): `<data_dir>/celebconnect/session.toml` via [`store::FileStore`]
//! - **WASM without `web`**: process memory via [`store::MemoryStore`]

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStore;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = store::FileStore;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformStore = store::MemoryStore;

/// The session handle every view shares through context.
pub type Session = store::AuthSession<PlatformStore>;

pub fn make_session_store() -> PlatformStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("celebconnect");
        store::FileStore::new(base)
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryStore::new()
    }
}
