//! Durable key-value storage for session data.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store mirrors its bearer token into browser `localStorage`.
//! Access goes through [`KeyValueStore`] so the store can be exercised with
//! [`MemoryStorage`] outside a browser.
//!
//! TRADE-OFFS
//! ==========
//! Browser storage is best-effort: a missing or throwing `localStorage` is
//! logged and treated as empty. SSR and native builds get a no-op
//! [`BrowserStorage`] so server rendering stays deterministic.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

/// Storage keys shared with the rest of the web app.
pub mod keys {
    /// Bearer token written by the session store.
    pub const ACCESS_TOKEN: &str = "access_token";
    /// Display name read by the session store. Written elsewhere, if at all.
    pub const USERNAME: &str = "username";
}

/// Synchronous string key-value surface. Writes are last-write-wins.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// `window.localStorage`, resolved on every call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    let window = web_sys::window()?;
    match window.local_storage() {
        Ok(storage) => storage,
        Err(err) => {
            leptos::logging::warn!("localStorage unavailable: {err:?}");
            None
        }
    }
}

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            match local_storage()?.get_item(key) {
                Ok(value) => value,
                Err(err) => {
                    leptos::logging::warn!("localStorage read failed: key={key} err={err:?}");
                    None
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            if let Err(err) = storage.set_item(key, value) {
                leptos::logging::warn!("localStorage write failed: key={key} err={err:?}");
            }
        }
    }

    fn remove(&mut self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            if let Err(err) = storage.remove_item(key) {
                leptos::logging::warn!("localStorage remove failed: key={key} err={err:?}");
            }
        }
    }
}

/// In-process storage, used for tests and non-browser hosts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an entry, builder style.
    #[must_use]
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_owned(), value.to_owned());
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}
