//! # Session context
//!
//! [`Session`] is the explicit handle to the authentication state shared by
//! the API clients and the views. It wraps the [`TokenStore`] holding the
//! bearer token and the side effect to run when the server rejects that token.
//!
//! Sessions are cheap to clone; clones share the same store and hook.

use std::fmt;
use std::sync::Arc;

use store::TokenStore;

type ExpiryHook = Arc<dyn Fn() + Send + Sync>;

/// Shared authentication state: the bearer token and what to do when it expires.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
    on_expired: ExpiryHook,
}

impl Session {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self {
            store,
            on_expired: Arc::new(|| {}),
        }
    }

    /// Set the side effect run by [`Session::expire`], typically a navigation to the root view.
    pub fn on_expired(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_expired = Arc::new(hook);
        self
    }

    /// The current bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.store.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Store the access token returned by login or registration.
    pub fn sign_in(&self, token: &str) {
        tracing::debug!("Session started");
        self.store.set(token);
    }

    /// Forget the token at the user's request.
    pub fn sign_out(&self) {
        tracing::debug!("Session ended by user");
        self.store.clear();
    }

    /// Forget the token after the server rejected it and run the expiry hook.
    pub fn expire(&self) {
        tracing::warn!("Session rejected by server, returning to login");
        self.store.clear();
        (self.on_expired)();
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use store::MemoryStore;

    #[test]
    fn test_sign_in_and_out() {
        let session = Session::new(Arc::new(MemoryStore::new()));
        assert!(!session.is_authenticated());

        session.sign_in("tok123");
        assert_eq!(session.token().as_deref(), Some("tok123"));

        session.sign_out();
        assert!(session.token().is_none());
    }

    #[test]
    fn test_expire_clears_token_and_runs_hook() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();
        let session = Session::new(Arc::new(MemoryStore::with_token("stale")))
            .on_expired(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });

        session.expire();

        assert!(session.token().is_none());
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_sign_out_does_not_run_hook() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();
        let session = Session::new(Arc::new(MemoryStore::with_token("tok")))
            .on_expired(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });

        session.sign_out();
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_clones_share_store() {
        let session = Session::new(Arc::new(MemoryStore::new()));
        let clone = session.clone();
        session.sign_in("shared");
        assert_eq!(clone.token().as_deref(), Some("shared"));
    }
}
