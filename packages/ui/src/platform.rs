//! Platform glue: token persistence, navigation to the root view, timers.
//!
//! - **Web** (WASM + `web` feature): `localStorage` via [`store::LocalStorageStore`]
//! - **Desktop** (native): a file under the user data directory via [`store::FileStore`]
//! - **WASM without `web`**: in-memory only

use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::*;
use store::TokenStore;

/// Create the platform-appropriate token store.
pub fn make_token_store() -> Arc<dyn TokenStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Arc::new(store::LocalStorageStore::new())
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        Arc::new(store::MemoryStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("memopad");
        Arc::new(store::FileStore::new(base))
    }
}

/// Send the user back to the application root after the session expired.
///
/// In a browser this is a full navigation to `/`, which re-derives every view
/// from the (now empty) token store. Where there is no URL to navigate to,
/// bumping `expiry_epoch` makes the shell re-derive its state instead.
pub fn navigate_to_root(mut expiry_epoch: SyncSignal<u64>) {
    return_to_root(move || *expiry_epoch.write() += 1);
}

/// Navigate to `/` in a browser; run `fallback` when that is not possible.
pub fn return_to_root(fallback: impl FnOnce()) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if window.location().set_href("/").is_ok() {
                return;
            }
        }
    }
    fallback();
}

pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
