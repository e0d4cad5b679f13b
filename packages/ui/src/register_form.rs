//! State and submit flow of the registration form.

use std::time::Duration;

use api::{ApiError, AuthService, Registration, Session};
use serde_json::Value;

use crate::cell::StateCell;

pub const REGISTER_FALLBACK_ERROR: &str = "Registration failed.";
pub const REGISTER_SUCCESS_MESSAGE: &str = "Registration complete!";

/// How long the success message stays up before the shell switches to the memos.
pub const REGISTER_REDIRECT_DELAY: Duration = Duration::from_secs(1);

/// Controlled inputs and feedback of the registration form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub error: Option<String>,
    pub success: Option<String>,
    submitting: bool,
    /// Set once registration succeeded; the form stays locked until the view goes away.
    completed: bool,
}

impl RegisterForm {
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// In flight, or already registered and waiting for the redirect.
    pub fn is_locked(&self) -> bool {
        self.submitting || self.completed
    }

    /// Clear previous feedback and mark the form in flight.
    ///
    /// Returns `None` while a submission is in flight or after one succeeded.
    pub fn begin_submit(&mut self) -> Option<Registration> {
        if self.is_locked() {
            return None;
        }
        self.submitting = true;
        self.error = None;
        self.success = None;
        Some(Registration::new(
            self.username.clone(),
            self.password.clone(),
            self.email.clone(),
        ))
    }

    pub fn finish_submit(&mut self, outcome: Result<Option<&str>, &ApiError>) {
        self.submitting = false;
        match outcome {
            Ok(message) => {
                self.completed = true;
                self.success = Some(message.unwrap_or(REGISTER_SUCCESS_MESSAGE).to_string());
            }
            Err(e) => self.error = Some(register_error_message(e)),
        }
    }
}

/// Every `field: value` pair of a validation error body, or a generic fallback.
///
/// ```text
/// {"username": ["A user with that username already exists."], "password": ["Too short.", "Too common."]}
/// → "username: A user with that username already exists., password: Too short.,Too common."
/// ```
pub fn register_error_message(err: &ApiError) -> String {
    let Some(Value::Object(fields)) = err.body() else {
        return REGISTER_FALLBACK_ERROR.to_string();
    };
    if fields.is_empty() {
        return REGISTER_FALLBACK_ERROR.to_string();
    }
    fields
        .iter()
        .map(|(field, value)| format!("{field}: {}", field_value(value)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn field_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(field_value).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}

/// Submit the registration form. Returns `true` once the session holds the new token.
///
/// The caller is expected to wait [`REGISTER_REDIRECT_DELAY`] before leaving
/// the form so the success message can be read.
pub async fn submit_register<A, C>(auth: &A, session: &Session, form: &C) -> bool
where
    A: AuthService,
    C: StateCell<RegisterForm>,
{
    let Some(registration) = form.update(RegisterForm::begin_submit) else {
        return false;
    };

    match auth.register(&registration).await {
        Ok(payload) => {
            session.sign_in(&payload.access);
            form.update(|f| f.finish_submit(Ok(payload.message.as_deref())));
            tracing::info!("Registered {}", registration.username);
            true
        }
        Err(e) => {
            tracing::debug!("Registration failed: {}", e);
            form.update(|f| f.finish_submit(Err(&e)));
            false
        }
    }
}
