//! # Key-value session storage
//!
//! [`KeyValueStore`] is the persistence seam for everything the client remembers
//! between page loads. Implementations live in sibling modules:
//!
//! | Store | Platform | Backing |
//! |-------|----------|---------|
//! | [`crate::LocalStore`] | web (WASM + `web` feature) | `window.localStorage` |
//! | [`crate::FileStore`] | desktop / native | TOML file in the platform data dir |
//! | [`crate::MemoryStore`] | tests | `HashMap` behind `Rc<RefCell<_>>` |
//!
//! Values are flat strings with no schema versioning. Implementations never fail
//! loudly: a broken backend degrades to "nothing stored".

/// Key holding the authenticated username.
pub const USER_KEY: &str = "user";
/// Key holding the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Key holding the fan profile's numeric id.
pub const FAN_ID_KEY: &str = "fanId";
/// Key holding the display theme (`"dark"` or `"light"`).
pub const THEME_KEY: &str = "theme";

/// Synchronous string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for std::rc::Rc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}
