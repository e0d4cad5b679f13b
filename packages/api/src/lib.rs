//! # API crate: HTTP clients for the Memopad auth and memo services
//!
//! The backends are external services with a fixed REST contract; this crate
//! is the client side of that contract, shared by the web and desktop
//! frontends.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Base URLs of the two services, from recognised overrides or defaults |
//! | [`error`] | [`ApiError`]: transport, status (with parsed body) and decode failures |
//! | [`models`] | Wire types: credentials, session payload, user profile, memos |
//! | [`session`] | [`Session`]: the bearer token store plus the expiry side effect |
//! | [`http`] | [`HttpClient`] with request/response [`Middleware`] stages |
//! | [`auth`] | [`AuthClient`] implementing [`AuthService`] |
//! | [`memos`] | [`MemoClient`] implementing [`MemoService`], with bearer and 401 stages |
//!
//! ## Wiring
//!
//! ```no_run
//! use std::sync::Arc;
//! use api::{ApiConfig, AuthClient, MemoClient, Session};
//!
//! let config = ApiConfig::load();
//! let session = Session::new(Arc::new(store::MemoryStore::new()))
//!     .on_expired(|| println!("back to login"));
//! let auth = AuthClient::new(config.auth_url.clone());
//! let memos = MemoClient::new(config.memos_url.clone(), session.clone());
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod http;
pub mod memos;
pub mod models;
pub mod session;

pub use auth::{AuthClient, AuthService};
pub use config::ApiConfig;
pub use error::ApiError;
pub use http::{BearerAuth, ExpireOnUnauthorized, HttpClient, Middleware};
pub use memos::{MemoClient, MemoService};
pub use models::{AuthSession, Credentials, Memo, MemoDraft, MemoId, Registration, UserInfo};
pub use session::Session;
