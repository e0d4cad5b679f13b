//! # API base URL configuration
//!
//! The client talks to two services, an auth service and a memo service, each
//! behind its own base URL. Both are configurable through recognised options
//! and fall back to relative paths that a development reverse proxy maps to
//! the two backends:
//!
//! | Option | Environment variable | Default |
//! |--------|---------------------|---------|
//! | [`ApiConfig::auth_url`] | `API_AUTH_URL` | `/api/auth` |
//! | [`ApiConfig::memos_url`] | `API_MEMOS_URL` | `/api/memos` |
//!
//! On native targets the variables are read at runtime (after loading `.env`
//! with `dotenvy`). Browsers have no process environment, so wasm builds use
//! the values captured at compile time instead. An empty value counts as
//! unset.
//!
//! HTTP clients need absolute URLs, so relative bases are joined to the page
//! origin with [`ApiConfig::resolve`] before the clients are built.

/// Default auth service base, proxied in development.
pub const DEFAULT_AUTH_URL: &str = "/api/auth";
/// Default memo service base, proxied in development.
pub const DEFAULT_MEMOS_URL: &str = "/api/memos";
/// Origin used to resolve relative bases on native targets when `APP_ORIGIN` is unset.
pub const DEFAULT_ORIGIN: &str = "http://localhost:3000";

/// Base URLs of the auth and memo services.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub auth_url: String,
    pub memos_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            auth_url: DEFAULT_AUTH_URL.to_string(),
            memos_url: DEFAULT_MEMOS_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Build a config from optional overrides; missing or empty values use the defaults.
    pub fn from_overrides(auth_url: Option<String>, memos_url: Option<String>) -> Self {
        Self {
            auth_url: non_empty(auth_url).unwrap_or_else(|| DEFAULT_AUTH_URL.to_string()),
            memos_url: non_empty(memos_url).unwrap_or_else(|| DEFAULT_MEMOS_URL.to_string()),
        }
    }

    /// Read the overrides from the environment.
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        dotenvy::dotenv().ok();

        let auth_url = std::env::var("API_AUTH_URL")
            .ok()
            .or_else(|| option_env!("API_AUTH_URL").map(str::to_string));
        let memos_url = std::env::var("API_MEMOS_URL")
            .ok()
            .or_else(|| option_env!("API_MEMOS_URL").map(str::to_string));

        Self::from_overrides(auth_url, memos_url)
    }

    /// Join relative bases onto `origin`. Absolute bases are kept as they are.
    pub fn resolve(&self, origin: &str) -> Self {
        Self {
            auth_url: resolve_base(&self.auth_url, origin),
            memos_url: resolve_base(&self.memos_url, origin),
        }
    }

    /// [`ApiConfig::from_env`] resolved against [`current_origin`].
    pub fn load() -> Self {
        let config = Self::from_env();
        let origin = current_origin();
        tracing::debug!(
            "API config: auth={} memos={} origin={}",
            config.auth_url,
            config.memos_url,
            origin
        );
        config.resolve(&origin)
    }
}

/// Origin of the running application.
///
/// The page origin in a browser; `APP_ORIGIN` or [`DEFAULT_ORIGIN`] elsewhere.
pub fn current_origin() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
            return origin;
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenvy::dotenv().ok();
        if let Some(origin) = non_empty(std::env::var("APP_ORIGIN").ok()) {
            return origin;
        }
    }

    DEFAULT_ORIGIN.to_string()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn resolve_base(base: &str, origin: &str) -> String {
    if base.starts_with("http://") || base.starts_with("https://") {
        return base.to_string();
    }
    let origin = origin.trim_end_matches('/');
    let path = base.trim_start_matches('/');
    format!("{origin}/{path}")
}
