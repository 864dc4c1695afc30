//! Data Model
//!
//! Client-side view models exchanged with the notes backend.
//! Nothing here is persisted by this crate.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A study note record: metadata plus the external document link
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Note {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub title: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub subject: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub class_level: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub college: String,
    #[serde(default, deserialize_with = "nullable")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub pages: Option<u32>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub drive_link: String,
    #[serde(default)]
    pub contributor_name: Option<String>,
}

impl Note {
    /// "Subject · 12 · College", skipping blank parts
    pub fn summary_line(&self) -> String {
        [&self.subject, &self.class_level, &self.college]
            .iter()
            .filter(|part| !part.trim().is_empty())
            .map(|part| part.as_str())
            .collect::<Vec<_>>()
            .join(" · ")
    }
}

/// A ranked contributor on the leaderboard
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Contributor {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub points: i64,
}

impl Contributor {
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "Contributor"
        } else {
            &self.name
        }
    }
}

/// A submission waiting for an admin decision
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PendingUpload {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub title: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub subject: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub class_level: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub college: String,
    #[serde(default)]
    pub drive_link: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub contributor_name: Option<String>,
}

/// A new note sent for review
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct UploadSubmission {
    pub title: String,
    pub class_level: String,
    pub college: String,
    pub subject: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<u32>,
    pub drive_link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contributor_name: Option<String>,
}

/// Parameters of a notes list/search request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteQuery {
    pub limit: usize,
    pub skip: usize,
    pub q: Option<String>,
}

impl NoteQuery {
    pub fn latest(limit: usize) -> Self {
        Self {
            limit,
            skip: 0,
            q: None,
        }
    }
}

/// Admin login credentials
#[derive(Clone, Serialize)]
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

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Opaque admin session credential
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(<redacted>)")
    }
}

// ============ Wire envelopes ============

/// `{items: [...]}` envelope used by every list endpoint
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new", deserialize_with = "nullable")]
    pub items: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AcceptRequest {
    pub assigned_points: u32,
}

#[derive(Debug, Serialize)]
pub struct RejectRequest<'a> {
    pub reason: &'a str,
}

// ============ Lenient field decoding ============

/// Accept `"12"`, `12` or `null` for a text field
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_string_or_number(deserializer)?.unwrap_or_default())
}

fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(s)) => Some(s),
        Some(Raw::Int(n)) => Some(n.to_string()),
        Some(Raw::Float(n)) => Some(n.to_string()),
        None => None,
    })
}

/// Treat an explicit `null` like a missing field
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_accepts_numeric_ids_and_missing_fields() {
        let note: Note = serde_json::from_str(
            r#"{"id": 42, "title": "Physics Ch. 1", "class_level": 12, "tags": null}"#,
        )
        .unwrap();

        assert_eq!(note.id, "42");
        assert_eq!(note.class_level, "12");
        assert!(note.tags.is_empty());
        assert_eq!(note.pages, None);
        assert_eq!(note.summary_line(), "12");
    }

    #[test]
    fn test_contributor_defaults() {
        let items: ListResponse<Contributor> =
            serde_json::from_str(r#"{"items": [{"name": ""}, {"id": "c2", "name": "Asha", "points": 30}]}"#)
                .unwrap();

        assert_eq!(items.items[0].display_name(), "Contributor");
        assert_eq!(items.items[0].points, 0);
        assert_eq!(items.items[1].id.as_deref(), Some("c2"));
    }

    #[test]
    fn test_list_response_without_items() {
        let list: ListResponse<Note> = serde_json::from_str("{}").unwrap();
        assert!(list.items.is_empty());

        let list: ListResponse<Note> = serde_json::from_str(r#"{"items": null}"#).unwrap();
        assert!(list.items.is_empty());
    }

    #[test]
    fn test_list_response_decodes_generic_items() {
        let notes: ListResponse<Note> =
            serde_json::from_str(r#"{"items": [{"id": 1, "title": "A"}, {"id": "2"}]}"#).unwrap();
        let ids: Vec<_> = notes.items.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);

        let pending: ListResponse<PendingUpload> =
            serde_json::from_str(r#"{"items": [{"id": "u1"}]}"#).unwrap();
        assert_eq!(pending.items.len(), 1);
    }

    #[test]
    fn test_submission_skips_unset_optionals() {
        let submission = UploadSubmission {
            title: "Algebra".into(),
            drive_link: "https://drive.google.com/file/d/abc/view".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&submission).unwrap();

        assert!(json.get("pages").is_none());
        assert!(json.get("contributor_name").is_none());
        assert_eq!(json["tags"], serde_json::json!([]));
    }

    #[test]
    fn test_secrets_are_redacted() {
        let creds = Credentials::new("admin", "hunter2");
        let token = SessionToken::new("abc123");

        assert!(!format!("{:?}", creds).contains("hunter2"));
        assert!(!format!("{:?}", token).contains("abc123"));
        assert_eq!(token.bearer(), "Bearer abc123");
    }
}
