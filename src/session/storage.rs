//! Key-value backends for the session store.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::error::StorageError;

/// Persistent string key-value storage.
///
/// Implementations take `&self` because browser storage is a process-wide singleton; in-memory
/// implementations use interior mutability.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str);
}

/// In-memory storage, shared between clones.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
    failing_key: Rc<RefCell<Option<String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every write to `key` fail, simulating a full or disabled storage quota.
    pub fn fail_writes_to(&self, key: &str) {
        *self.failing_key.borrow_mut() = Some(key.to_string());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.failing_key.borrow().as_deref() == Some(key) {
            return Err(StorageError::Write {
                key: key.to_string(),
                reason: "quota exceeded".to_string(),
            });
        }

        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Browser `localStorage`
#[cfg(feature = "web")]
#[derive(Debug, Clone, Copy, Default)]
pub struct WebStorage;

#[cfg(feature = "web")]
impl SessionStorage for WebStorage {
    fn get(&self, key: &str) -> Option<String> {
        use gloo_storage::{LocalStorage, Storage};

        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        use gloo_storage::{LocalStorage, Storage};

        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }

    fn remove(&self, key: &str) {
        use gloo_storage::{LocalStorage, Storage};

        LocalStorage::delete(key);
    }
}
