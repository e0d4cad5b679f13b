//! # Memo models
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Memo`] | A memo as returned by the memo service. `id` is assigned by the server; `user_id` and `updated_at` are passed through when present. |
//! | [`MemoDraft`] | The `{title, content}` body sent on create and update. |
//!
//! The memo service emits timestamps either with an offset
//! (`2024-05-01T09:30:00.123456+00:00`) or naive (`2024-05-01T09:30:00`),
//! depending on its database. Both are accepted; naive values are read as UTC.

use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned memo identifier.
pub type MemoId = i64;

/// A memo owned by the authenticated user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Memo {
    pub id: MemoId,
    #[serde(default)]
    pub user_id: Option<i64>,
    pub title: String,
    pub content: String,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Memo {
    /// Creation time formatted for display: `2024-05-01 09:30`.
    pub fn created_label(&self) -> String {
        self.created_at.format("%Y-%m-%d %H:%M").to_string()
    }

    /// `updated_at` is more than a second after `created_at`.
    pub fn was_edited(&self) -> bool {
        self.updated_at
            .is_some_and(|updated| updated - self.created_at > TimeDelta::seconds(1))
    }

    pub fn draft(&self) -> MemoDraft {
        MemoDraft::new(self.title.clone(), self.content.clone())
    }
}

/// Title and content of a memo being created or updated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemoDraft {
    pub title: String,
    pub content: String,
}

impl MemoDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Both fields are non-empty.
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.content.is_empty()
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.and_utc())
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}")))
}

fn deserialize_optional_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse_timestamp(&raw)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}"))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_memo_with_offset_timestamp() {
        let memo: Memo = serde_json::from_value(json!({
            "id": 7,
            "user_id": 1,
            "title": "Groceries",
            "content": "Milk, eggs",
            "created_at": "2024-05-01T09:30:00.123456+00:00",
            "updated_at": null,
        }))
        .unwrap();
        assert_eq!(memo.id, 7);
        assert_eq!(memo.user_id, Some(1));
        assert_eq!(memo.created_label(), "2024-05-01 09:30");
        assert!(!memo.was_edited());
    }

    #[test]
    fn test_parse_memo_with_naive_timestamp() {
        let memo: Memo = serde_json::from_value(json!({
            "id": 8,
            "title": "T",
            "content": "C",
            "created_at": "2024-05-01T23:05:09",
            "updated_at": "2024-05-02T08:00:00.5",
        }))
        .unwrap();
        assert_eq!(memo.created_label(), "2024-05-01 23:05");
        assert!(memo.was_edited());
        assert!(memo.user_id.is_none());
    }

    #[test]
    fn test_update_stamped_at_creation_is_not_an_edit() {
        let memo: Memo = serde_json::from_value(json!({
            "id": 9,
            "title": "T",
            "content": "C",
            "created_at": "2024-05-01T09:30:00.100000Z",
            "updated_at": "2024-05-01T09:30:00.100450Z",
        }))
        .unwrap();
        assert!(!memo.was_edited());
    }

    #[test]
    fn test_invalid_timestamp_is_rejected() {
        let result: Result<Memo, _> = serde_json::from_value(json!({
            "id": 1,
            "title": "T",
            "content": "C",
            "created_at": "yesterday",
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_draft_completeness() {
        assert!(MemoDraft::new("A", "B").is_complete());
        assert!(!MemoDraft::new("", "B").is_complete());
        assert!(!MemoDraft::new("A", "").is_complete());
        assert!(!MemoDraft::default().is_complete());
    }
}
