//! # Token store abstraction
//!
//! A [`TokenStore`] keeps at most one opaque bearer token. Every backend
//! stores it under the same well-known key, [`TOKEN_KEY`], so a token written
//! by one build of the client is found by the next one.
//!
//! | Backend | Platform | Where the token lives |
//! |---------|----------|-----------------------|
//! | [`crate::MemoryStore`] | any | process memory (tests, wasm without `web`) |
//! | [`crate::FileStore`] | desktop | `<data_dir>/memopad/accessToken` |
//! | `LocalStorageStore` | web | `window.localStorage["accessToken"]` |
//!
//! Stores never fail loudly. A storage backend that cannot be read behaves as
//! if no token was stored, which sends the user back to the login view.

use std::fmt;

/// Key under which the bearer token is persisted.
pub const TOKEN_KEY: &str = "accessToken";

/// Storage for a single bearer token.
pub trait TokenStore: Send + Sync {
    /// The stored token, if any.
    fn get(&self) -> Option<String>;

    /// Persist `token`, replacing any previous value.
    fn set(&self, token: &str);

    /// Remove the stored token.
    fn clear(&self);
}

/// Log a failed storage operation. Returns `true` if `result` succeeded.
pub(crate) fn warn_on_failure<E: fmt::Debug>(result: Result<(), E>, action: &str) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("Failed to {}: {:?}", action, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warn_on_failure_reports_outcome() {
        assert!(warn_on_failure(Ok::<(), &str>(()), "remove token"));
        assert!(!warn_on_failure(Err("QuotaExceededError"), "remove token"));
    }
}
