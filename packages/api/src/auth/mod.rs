//! # Auth service client
//!
//! [`AuthClient`] calls the registration, login and profile endpoints under
//! the auth base URL. It carries no middleware: login and registration are
//! anonymous, and the profile call passes its bearer token explicitly. A
//! `401` from the auth service is therefore an ordinary error for the caller
//! and never expires the session.
//!
//! | Operation | Request |
//! |-----------|---------|
//! | [`register`](AuthService::register) | `POST {auth}/register/` with `username`, `password`, `password2`, `email` |
//! | [`login`](AuthService::login) | `POST {auth}/login/` with `username`, `password` |
//! | [`get_user_info`](AuthService::get_user_info) | `GET {auth}/me/` with `Authorization: Bearer <token>` |

use std::future::Future;

use reqwest::Method;

use crate::error::ApiError;
use crate::http::HttpClient;
use crate::models::{AuthSession, Credentials, Registration, UserInfo};

/// Operations offered by the auth service.
pub trait AuthService {
    fn register(
        &self,
        registration: &Registration,
    ) -> impl Future<Output = Result<AuthSession, ApiError>>;
    fn login(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<AuthSession, ApiError>>;
    fn get_user_info(&self, token: &str) -> impl Future<Output = Result<UserInfo, ApiError>>;
}

/// HTTP client for the auth service.
#[derive(Clone, Debug)]
pub struct AuthClient {
    http: HttpClient,
}

impl AuthClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(base_url),
        }
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }
}

impl AuthService for AuthClient {
    async fn register(&self, registration: &Registration) -> Result<AuthSession, ApiError> {
        let request = self
            .http
            .request(Method::POST, "/register/")
            .json(registration);
        self.http.send_json(request).await
    }

    async fn login(&self, credentials: &Credentials) -> Result<AuthSession, ApiError> {
        let request = self.http.request(Method::POST, "/login/").json(credentials);
        self.http.send_json(request).await
    }

    async fn get_user_info(&self, token: &str) -> Result<UserInfo, ApiError> {
        let request = self.http.request(Method::GET, "/me/").bearer_auth(token);
        self.http.send_json(request).await
    }
}
