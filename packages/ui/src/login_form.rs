//! State and submit flow of the login form.

use api::{ApiError, AuthService, Credentials, Session};
use serde_json::Value;

use crate::cell::StateCell;

pub const LOGIN_FALLBACK_ERROR: &str = "Login failed.";

/// Controlled inputs and feedback of the login form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub error: Option<String>,
    submitting: bool,
}

impl LoginForm {
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Clear the previous error and mark the form in flight.
    ///
    /// Returns `None` while a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        self.error = None;
        Some(Credentials::new(self.username.clone(), self.password.clone()))
    }

    pub fn finish_submit(&mut self, error: Option<&ApiError>) {
        self.submitting = false;
        self.error = error.map(login_error_message);
    }
}

/// The server's `detail`, or a generic fallback when it is missing or empty.
///
/// Non-string details are shown as JSON; `null`, `false`, `0` and `""` count as missing.
pub fn login_error_message(err: &ApiError) -> String {
    match err.body().and_then(|body| body.get("detail")) {
        Some(Value::String(detail)) if !detail.is_empty() => detail.clone(),
        Some(Value::Null | Value::Bool(false)) | None => LOGIN_FALLBACK_ERROR.to_string(),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => LOGIN_FALLBACK_ERROR.to_string(),
        Some(Value::String(_)) => LOGIN_FALLBACK_ERROR.to_string(),
        Some(detail) => detail.to_string(),
    }
}

/// Submit the login form. Returns `true` once the session holds the new token.
pub async fn submit_login<A, C>(auth: &A, session: &Session, form: &C) -> bool
where
    A: AuthService,
    C: StateCell<LoginForm>,
{
    let Some(credentials) = form.update(LoginForm::begin_submit) else {
        return false;
    };

    match auth.login(&credentials).await {
        Ok(payload) => {
            session.sign_in(&payload.access);
            form.update(|f| f.finish_submit(None));
            tracing::info!("Logged in as {}", credentials.username);
            true
        }
        Err(e) => {
            tracing::debug!("Login failed: {}", e);
            form.update(|f| f.finish_submit(Some(&e)));
            false
        }
    }
}
