use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::kv::KeyValueStore;

/// In-memory KeyValueStore for testing. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}
