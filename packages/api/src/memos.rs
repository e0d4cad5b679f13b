//! # Memo service client
//!
//! [`MemoClient`] performs memo CRUD under the memos base URL. It is built
//! from a [`Session`] and registers two middleware stages on its
//! [`HttpClient`]:
//!
//! 1. [`BearerAuth`] attaches the session token to every request.
//! 2. [`ExpireOnUnauthorized`] expires the session on any `401`, whichever
//!    operation triggered it, before the error reaches the caller.
//!
//! | Operation | Request |
//! |-----------|---------|
//! | [`get_memos`](MemoService::get_memos) | `GET {memos}/` |
//! | [`get_memo`](MemoService::get_memo) | `GET {memos}/{id}` |
//! | [`create_memo`](MemoService::create_memo) | `POST {memos}/` with `title`, `content` |
//! | [`update_memo`](MemoService::update_memo) | `PUT {memos}/{id}` with `title`, `content` |
//! | [`delete_memo`](MemoService::delete_memo) | `DELETE {memos}/{id}` |
//!
//! Create and update succeed on any 2xx. Their response body is decoded when
//! it can be, but a body that does not parse is not an error.

use std::future::Future;

use reqwest::Method;

use crate::error::ApiError;
use crate::http::{BearerAuth, ExpireOnUnauthorized, HttpClient};
use crate::models::{Memo, MemoDraft, MemoId};
use crate::session::Session;

/// Operations offered by the memo service.
pub trait MemoService {
    fn get_memos(&self) -> impl Future<Output = Result<Vec<Memo>, ApiError>>;
    fn get_memo(&self, id: MemoId) -> impl Future<Output = Result<Memo, ApiError>>;
    /// The created memo, or `None` when the server's 2xx body could not be decoded.
    fn create_memo(
        &self,
        draft: &MemoDraft,
    ) -> impl Future<Output = Result<Option<Memo>, ApiError>>;
    /// The updated memo, or `None` when the server's 2xx body could not be decoded.
    fn update_memo(
        &self,
        id: MemoId,
        draft: &MemoDraft,
    ) -> impl Future<Output = Result<Option<Memo>, ApiError>>;
    fn delete_memo(&self, id: MemoId) -> impl Future<Output = Result<(), ApiError>>;
}

/// Authenticated HTTP client for the memo service.
#[derive(Clone, Debug)]
pub struct MemoClient {
    http: HttpClient,
}

impl MemoClient {
    pub fn new(base_url: impl Into<String>, session: Session) -> Self {
        let http = HttpClient::new(base_url)
            .with_middleware(BearerAuth::new(session.clone()))
            .with_middleware(ExpireOnUnauthorized::new(session));
        Self { http }
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }
}

impl MemoService for MemoClient {
    async fn get_memos(&self) -> Result<Vec<Memo>, ApiError> {
        let request = self.http.request(Method::GET, "/");
        self.http.send_json(request).await
    }

    async fn get_memo(&self, id: MemoId) -> Result<Memo, ApiError> {
        let request = self.http.request(Method::GET, &format!("/{id}"));
        self.http.send_json(request).await
    }

    async fn create_memo(&self, draft: &MemoDraft) -> Result<Option<Memo>, ApiError> {
        let request = self.http.request(Method::POST, "/").json(draft);
        self.http.send_json_lenient(request).await
    }

    async fn update_memo(&self, id: MemoId, draft: &MemoDraft) -> Result<Option<Memo>, ApiError> {
        let request = self.http.request(Method::PUT, &format!("/{id}")).json(draft);
        self.http.send_json_lenient(request).await
    }

    async fn delete_memo(&self, id: MemoId) -> Result<(), ApiError> {
        let request = self.http.request(Method::DELETE, &format!("/{id}"));
        self.http.send(request).await?;
        Ok(())
    }
}
