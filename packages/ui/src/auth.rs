//! Session context and hooks for the UI.

use std::sync::Arc;

use api::{ApiConfig, AuthClient, MemoClient, Session};
use dioxus::prelude::*;
use store::TokenStore;

use crate::platform::{make_token_store, navigate_to_root};

/// Everything the views need to talk to the backend.
#[derive(Clone, Debug)]
pub struct AppContext {
    pub session: Session,
    pub auth: AuthClient,
    pub memos: MemoClient,
    /// Bumped each time the session expires without a page navigation.
    pub expiry_epoch: SyncSignal<u64>,
}

impl AppContext {
    pub fn new(
        config: ApiConfig,
        store: Arc<dyn TokenStore>,
        expiry_epoch: SyncSignal<u64>,
    ) -> Self {
        let session = Session::new(store).on_expired(move || navigate_to_root(expiry_epoch));
        Self {
            auth: AuthClient::new(config.auth_url),
            memos: MemoClient::new(config.memos_url, session.clone()),
            session,
            expiry_epoch,
        }
    }
}

/// Get the shared session and API clients.
pub fn use_app() -> AppContext {
    use_context::<AppContext>()
}

/// Provider component that owns the session and API clients.
/// Wrap your app with this component before rendering any view.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let expiry_epoch = use_signal_sync(|| 0u64);

    use_context_provider(move || AppContext::new(ApiConfig::load(), make_token_store(), expiry_epoch));

    rsx! {
        {children}
    }
}
