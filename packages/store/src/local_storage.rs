//! # `localStorage` token store, browser-side persistence
//!
//! [`LocalStorageStore`] keeps the token in `window.localStorage`, so it
//! survives page reloads and is shared by every tab of the same origin.
//!
//! The store holds only the key name and looks up `localStorage` on every
//! call: `web_sys::Storage` is not `Send`, and the lookup is a cheap property
//! access. A browser that refuses storage access (private mode, disabled
//! cookies) reads as "no token".

use crate::token::{warn_on_failure, TokenStore, TOKEN_KEY};

/// `window.localStorage`-backed TokenStore for the web platform.
#[derive(Clone, Debug)]
pub struct LocalStorageStore {
    key: String,
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalStorageStore {
    /// Store the token under the default [`TOKEN_KEY`].
    pub fn new() -> Self {
        Self::with_key(TOKEN_KEY)
    }

    pub fn with_key(key: &str) -> Self {
        Self {
            key: key.to_string(),
        }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl TokenStore for LocalStorageStore {
    fn get(&self) -> Option<String> {
        Self::storage()?.get_item(&self.key).ok().flatten()
    }

    fn set(&self, token: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable, token not persisted");
            return;
        };
        warn_on_failure(storage.set_item(&self.key, token), "write token to localStorage");
    }

    fn clear(&self) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable, token not cleared");
            return;
        };
        warn_on_failure(storage.remove_item(&self.key), "remove token from localStorage");
    }
}
