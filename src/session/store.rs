//! Persistent token store.
//!
//! Holds the access token and, when refresh is enabled, the refresh token in
//! device-scoped storage so a reload can restore the session. Writing `None`
//! or an empty string removes the entry, so presence of a key is a reliable
//! signal that session data exists on this device.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Durable string key/value medium.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-process storage for tests and non-browser builds. Clones share entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl MemoryStorage {
    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Browser `localStorage`. Every access degrades to a no-op when storage is
/// unavailable (private mode, disabled cookies, non-browser build).
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                if storage.set_item(key, value).is_err() {
                    log::warn!("localStorage write failed for {key}");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}

/// Typed view over the two token entries.
#[derive(Clone)]
pub struct TokenStore {
    storage: Rc<dyn KeyValueStorage>,
    access_key: &'static str,
    refresh_key: &'static str,
}

impl TokenStore {
    pub fn new(storage: Rc<dyn KeyValueStorage>, access_key: &'static str, refresh_key: &'static str) -> Self {
        Self { storage, access_key, refresh_key }
    }

    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        self.read(self.access_key)
    }

    #[must_use]
    pub fn refresh_token(&self) -> Option<String> {
        self.read(self.refresh_key)
    }

    pub fn set_access_token(&self, token: Option<&str>) {
        self.write(self.access_key, token);
    }

    pub fn set_refresh_token(&self, token: Option<&str>) {
        self.write(self.refresh_key, token);
    }

    /// Remove both entries.
    pub fn clear(&self) {
        self.storage.remove(self.access_key);
        self.storage.remove(self.refresh_key);
    }

    // An empty stored value is treated as absent.
    fn read(&self, key: &str) -> Option<String> {
        self.storage.get(key).filter(|v| !v.is_empty())
    }

    fn write(&self, key: &str, token: Option<&str>) {
        match token.filter(|t| !t.is_empty()) {
            Some(token) => self.storage.set(key, token),
            None => self.storage.remove(key),
        }
    }
}
