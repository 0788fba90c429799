//! Persisted dark/light display preference.

use crate::kv::{KeyValueStore, THEME_KEY};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Anything other than `"dark"` reads as light.
    pub fn load(store: &impl KeyValueStore) -> Self {
        match store.get(THEME_KEY).as_deref() {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn save(self, store: &impl KeyValueStore) {
        store.set(THEME_KEY, self.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_theme_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(Theme::load(&store), Theme::Light);

        Theme::Dark.save(&store);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(Theme::load(&store), Theme::Dark);

        Theme::load(&store).toggled().save(&store);
        assert_eq!(Theme::load(&store), Theme::Light);
    }

    #[test]
    fn test_unknown_value_is_light() {
        let store = MemoryStore::new();
        store.set(THEME_KEY, "solarized");
        assert_eq!(Theme::load(&store), Theme::Light);
        assert!(!Theme::load(&store).is_dark());
    }
}
