pub mod config;
pub mod kv;
pub mod session;
pub mod theme;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use config::ClientConfig;
pub use kv::KeyValueStore;
pub use session::{AuthSession, AuthState, Identity, SubscriptionId};
pub use theme::Theme;
