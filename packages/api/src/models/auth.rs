//! Request and response bodies of the auth service.

use serde::{Deserialize, Serialize};

use super::UserInfo;

/// Body of `POST /login/`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Body of `POST /register/`.
///
/// The form asks for the password once; `password2` always repeats it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Registration {
    pub username: String,
    pub password: String,
    pub password2: String,
    pub email: String,
}

impl Registration {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        let password = password.into();
        Self {
            username: username.into(),
            password2: password.clone(),
            password,
            email: email.into(),
        }
    }
}

/// Session payload returned by login and registration.
///
/// Only `access` is used by the client. Registration additionally returns the
/// created `user` and a confirmation `message`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthSession {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
    #[serde(default)]
    pub user: Option<UserInfo>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_registration_repeats_password() {
        let body = serde_json::to_value(Registration::new("alice", "s3cret!", "a@example.com"))
            .unwrap();
        assert_eq!(
            body,
            json!({
                "username": "alice",
                "password": "s3cret!",
                "password2": "s3cret!",
                "email": "a@example.com",
            })
        );
    }

    #[test]
    fn test_login_payload_without_user() {
        let session: AuthSession =
            serde_json::from_value(json!({"access": "tok123", "refresh": "ref456"})).unwrap();
        assert_eq!(session.access, "tok123");
        assert_eq!(session.refresh.as_deref(), Some("ref456"));
        assert!(session.user.is_none());
        assert!(session.message.is_none());
    }

    #[test]
    fn test_register_payload_with_user_and_message() {
        let session: AuthSession = serde_json::from_value(json!({
            "user": {"id": 1, "username": "alice", "email": "a@example.com"},
            "refresh": "ref",
            "access": "acc",
            "message": "Welcome aboard",
        }))
        .unwrap();
        assert_eq!(session.user.unwrap().username, "alice");
        assert_eq!(session.message.as_deref(), Some("Welcome aboard"));
    }
}
