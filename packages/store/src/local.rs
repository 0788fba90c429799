//! # localStorage session store: browser-side persistence
//!
//! [`LocalStore`] is the [`KeyValueStore`] implementation used on the **web
//! platform**. It writes straight through to `window.localStorage`, so values
//! survive a full page reload but stay scoped to one browser profile.
//!
//! ## Connection management
//!
//! `LocalStore` is a zero-size struct that looks up `window.localStorage` on every
//! operation.
//!
//! ## Error handling
//!
//! All trait methods swallow errors (returning `None` for reads, doing nothing for
//! writes). Private-browsing modes can throw on `setItem`; the session then lives
//! only as long as the page.

use crate::kv::KeyValueStore;
use wasm_bindgen::JsValue;

/// localStorage-backed KeyValueStore for web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                tracing::warn!("localStorage unavailable: {}", describe(&e));
                None
            }
        }
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        let storage = Self::storage()?;
        storage.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            tracing::warn!("Failed to persist {key}: {}", describe(&e));
        }
    }

    fn remove(&self, key: &str) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if let Err(e) = storage.remove_item(key) {
            tracing::warn!("Failed to remove {key}: {}", describe(&e));
        }
    }
}
