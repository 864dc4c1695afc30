//! Error Types
//!
//! Failures of backend calls, form input and preference persistence.
//! None of these are fatal: each one is local to the action that raised it.

use thiserror::Error;

/// Errors returned by a [`NotesApi`](crate::api::NotesApi) implementation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never completed (DNS, connection refused, CORS, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("Request rejected ({status}): {}", detail.as_deref().unwrap_or("no details"))]
    Rejected { status: u16, detail: Option<String> },

    /// Success status but the body could not be read
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a rejection from a status code and the raw response body.
    ///
    /// The detail text is taken from a JSON `detail`, `error` or `message`
    /// string field when the body carries one.
    pub fn rejected(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                ["detail", "error", "message"]
                    .iter()
                    .find_map(|field| value.get(*field)?.as_str().map(str::to_string))
            })
            .filter(|text| !text.trim().is_empty());

        ApiError::Rejected { status, detail }
    }

    /// Message suitable for showing to a user
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => {
                "Could not reach the server. Check your connection and try again.".to_string()
            }
            ApiError::Rejected {
                detail: Some(detail),
                ..
            } => detail.clone(),
            ApiError::Rejected { status, detail: None } => {
                format!("The server rejected the request ({})", status)
            }
            ApiError::Decode(_) => "The server sent a response we could not read.".to_string(),
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }
}

/// Result type for backend calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Client-side input validation failures, raised before any request is sent
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{field} must be a whole number, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

/// Preference persistence failures
#[derive(Error, Debug)]
pub enum PreferenceError {
    #[error("Preference storage unavailable")]
    Unavailable,

    #[error("Failed to write preference {key}: {error}")]
    Write { key: String, error: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_reads_detail_field() {
        let err = ApiError::rejected(401, r#"{"detail": "Invalid credentials"}"#);
        assert_eq!(
            err,
            ApiError::Rejected {
                status: 401,
                detail: Some("Invalid credentials".to_string())
            }
        );
        assert_eq!(err.user_message(), "Invalid credentials");
    }

    #[test]
    fn test_rejected_without_detail() {
        let err = ApiError::rejected(500, "Internal Server Error");
        assert_eq!(err, ApiError::Rejected { status: 500, detail: None });
        assert!(err.user_message().contains("500"));

        // FastAPI validation errors carry an array, not a string
        let err = ApiError::rejected(422, r#"{"detail": [{"loc": ["body"]}]}"#);
        assert_eq!(err, ApiError::Rejected { status: 422, detail: None });
    }

    #[test]
    fn test_network_and_rejected_messages_differ() {
        let network = ApiError::Network("connection refused".into());
        let rejected = ApiError::rejected(400, "{}");
        assert!(network.is_network());
        assert!(!rejected.is_network());
        assert_ne!(network.user_message(), rejected.user_message());
    }
}
