//! Errors returned by the API clients.

use serde_json::Value;

/// Failure of a single request/response round trip.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connection refused, CORS, ...).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    ///
    /// `body` holds the response body when it was valid JSON.
    #[error("server responded with status {status}")]
    Status { status: u16, body: Option<Value> },

    /// A success response whose body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status of the response, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            ApiError::Decode(_) => None,
        }
    }

    /// Parsed JSON body of an error response.
    pub fn body(&self) -> Option<&Value> {
        match self {
            ApiError::Status { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_error_accessors() {
        let err = ApiError::Status {
            status: 401,
            body: Some(json!({"detail": "expired"})),
        };
        assert_eq!(err.status(), Some(401));
        assert!(err.is_unauthorized());
        assert_eq!(err.body().unwrap()["detail"], "expired");
        assert_eq!(err.to_string(), "server responded with status 401");
    }

    #[test]
    fn test_decode_error_has_no_status() {
        let err: ApiError = serde_json::from_str::<Value>("{").unwrap_err().into();
        assert_eq!(err.status(), None);
        assert!(err.body().is_none());
        assert!(!err.is_unauthorized());
    }
}
