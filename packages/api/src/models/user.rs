//! # User profile returned by the auth service
//!
//! [`UserInfo`] mirrors the `/me/` response (`id`, `username`, `email`). It is
//! only ever displayed: the Memos view re-fetches it on every mount and drops
//! it when the view goes away.

use serde::{Deserialize, Serialize};

/// Profile of the authenticated user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    #[serde(default)]
    pub id: Option<i64>,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl UserInfo {
    /// Get display name, falling back to email if username is empty.
    pub fn display_name(&self) -> &str {
        match self.email.as_deref() {
            Some(email) if self.username.is_empty() => email,
            _ => &self.username,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_me_response() {
        let user: UserInfo =
            serde_json::from_str(r#"{"id": 3, "username": "alice", "email": "a@example.com"}"#)
                .unwrap();
        assert_eq!(user.id, Some(3));
        assert_eq!(user.display_name(), "alice");
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user = UserInfo {
            id: None,
            username: String::new(),
            email: Some("a@example.com".to_string()),
        };
        assert_eq!(user.display_name(), "a@example.com");
    }
}
