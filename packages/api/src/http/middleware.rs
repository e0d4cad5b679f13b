//! # Request and response stages
//!
//! A [`Middleware`] hooks into every round trip made by an [`HttpClient`]:
//! `before_request` can decorate the outgoing request, `after_response` sees
//! the status of every response that came back, before the client turns
//! error statuses into [`ApiError`]s. Stages run in the order they were added.
//!
//! | Middleware | Stage | Effect |
//! |------------|-------|--------|
//! | [`BearerAuth`] | request | `Authorization: Bearer <token>` when the session holds a token |
//! | [`ExpireOnUnauthorized`] | response | [`Session::expire`] on any `401` |
//!
//! [`HttpClient`]: super::HttpClient
//! [`ApiError`]: crate::ApiError

use reqwest::{RequestBuilder, StatusCode};

use crate::session::Session;

/// A stage invoked uniformly around every request of an HTTP client.
pub trait Middleware: Send + Sync {
    fn before_request(&self, request: RequestBuilder) -> RequestBuilder {
        request
    }

    fn after_response(&self, _status: StatusCode) {}
}

/// Attaches the session's bearer token, if there is one.
#[derive(Clone, Debug)]
pub struct BearerAuth {
    session: Session,
}

impl BearerAuth {
    pub fn new(session: Session) -> Self {
        Self { session }
    }
}

impl Middleware for BearerAuth {
    fn before_request(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

/// Expires the session whenever the server answers `401 Unauthorized`.
#[derive(Clone, Debug)]
pub struct ExpireOnUnauthorized {
    session: Session,
}

impl ExpireOnUnauthorized {
    pub fn new(session: Session) -> Self {
        Self { session }
    }
}

impl Middleware for ExpireOnUnauthorized {
    fn after_response(&self, status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            self.session.expire();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use store::MemoryStore;

    fn counting_session(token: Option<&str>) -> (Session, Arc<AtomicUsize>) {
        let store = match token {
            Some(t) => MemoryStore::with_token(t),
            None => MemoryStore::new(),
        };
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();
        let session = Session::new(Arc::new(store)).on_expired(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (session, fired)
    }

    #[test]
    fn test_bearer_header_attached_when_token_present() {
        let (session, _) = counting_session(Some("tok123"));
        let client = reqwest::Client::new();
        let request = BearerAuth::new(session)
            .before_request(client.get("http://localhost/api/memos/"))
            .build()
            .unwrap();
        assert_eq!(
            request.headers().get(reqwest::header::AUTHORIZATION).unwrap(),
            "Bearer tok123"
        );
    }

    #[test]
    fn test_request_unmodified_without_token() {
        let (session, _) = counting_session(None);
        let client = reqwest::Client::new();
        let request = BearerAuth::new(session)
            .before_request(client.get("http://localhost/api/memos/"))
            .build()
            .unwrap();
        assert!(request.headers().get(reqwest::header::AUTHORIZATION).is_none());
    }

    #[test]
    fn test_only_401_expires_session() {
        let (session, fired) = counting_session(Some("tok"));
        let stage = ExpireOnUnauthorized::new(session.clone());

        for status in [
            StatusCode::OK,
            StatusCode::NO_CONTENT,
            StatusCode::BAD_REQUEST,
            StatusCode::FORBIDDEN,
            StatusCode::NOT_FOUND,
            StatusCode::INTERNAL_SERVER_ERROR,
        ] {
            stage.after_response(status);
        }
        assert_eq!(fired.load(Ordering::SeqCst), 0);
        assert_eq!(session.token().as_deref(), Some("tok"));

        stage.after_response(StatusCode::UNAUTHORIZED);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!(session.token().is_none());
    }
}
