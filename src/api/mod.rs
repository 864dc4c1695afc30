//! Backend API
//!
//! The notes backend is an external collaborator reached over HTTP.
//! [`NotesApi`] is the seam every page view talks to; the native build
//! provides a `reqwest` implementation ([`HttpClient`]) and the web UI
//! provides its own over `gloo-net`.
//!
//! ## Endpoints
//!
//! | Method | Path | Auth |
//! |---|---|---|
//! | GET | `/api/notes?limit=&q=&skip=` | none |
//! | GET | `/api/notes/{id}` | none |
//! | GET | `/api/leaderboard` | none |
//! | POST | `/api/uploads` | none |
//! | POST | `/api/admin/login` | none |
//! | GET | `/api/admin/uploads?status=pending` | bearer |
//! | POST | `/api/admin/uploads/{id}/accept` | bearer |
//! | POST | `/api/admin/uploads/{id}/reject` | bearer |

#[cfg(feature = "native")]
mod http;

#[cfg(feature = "native")]
pub use http::HttpClient;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{
    Contributor, Credentials, Note, NoteQuery, PendingUpload, SessionToken, UploadSubmission,
};

/// Default backend base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Operations offered by the notes backend.
///
/// Futures are not required to be `Send` so the browser client can implement
/// this trait on top of JS promises.
#[async_trait(?Send)]
pub trait NotesApi {
    /// List or search notes
    async fn list_notes(&self, query: &NoteQuery) -> ApiResult<Vec<Note>>;

    /// Fetch a single note
    async fn get_note(&self, id: &str) -> ApiResult<Note>;

    /// Contributor rankings, in server order
    async fn leaderboard(&self) -> ApiResult<Vec<Contributor>>;

    /// Submit a new note for review
    async fn submit_upload(&self, submission: &UploadSubmission) -> ApiResult<()>;

    /// Exchange credentials for a session token
    async fn admin_login(&self, credentials: &Credentials) -> ApiResult<SessionToken>;

    /// Submissions awaiting review
    async fn pending_uploads(&self, token: &SessionToken) -> ApiResult<Vec<PendingUpload>>;

    /// Accept a submission, crediting the contributor with `points`
    async fn accept_upload(&self, token: &SessionToken, id: &str, points: u32) -> ApiResult<()>;

    /// Reject a submission; an empty reason is allowed
    async fn reject_upload(&self, token: &SessionToken, id: &str, reason: &str) -> ApiResult<()>;
}

/// URL builders shared by every client implementation
pub mod endpoints {
    use crate::models::NoteQuery;

    /// Normalize a configured base URL: trim whitespace and trailing slashes
    pub fn normalize_base(base: &str) -> String {
        base.trim().trim_end_matches('/').to_string()
    }

    pub fn notes(base: &str, query: &NoteQuery) -> String {
        let mut url = format!("{}/api/notes?limit={}", base, query.limit);

        if let Some(q) = query.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            url.push_str(&format!("&q={}", urlencoding::encode(q)));
        }
        if query.skip > 0 {
            url.push_str(&format!("&skip={}", query.skip));
        }

        url
    }

    pub fn note(base: &str, id: &str) -> String {
        format!("{}/api/notes/{}", base, urlencoding::encode(id))
    }

    pub fn leaderboard(base: &str) -> String {
        format!("{}/api/leaderboard", base)
    }

    pub fn uploads(base: &str) -> String {
        format!("{}/api/uploads", base)
    }

    pub fn admin_login(base: &str) -> String {
        format!("{}/api/admin/login", base)
    }

    pub fn pending_uploads(base: &str) -> String {
        format!("{}/api/admin/uploads?status=pending", base)
    }

    pub fn accept(base: &str, id: &str) -> String {
        format!("{}/api/admin/uploads/{}/accept", base, urlencoding::encode(id))
    }

    pub fn reject(base: &str, id: &str) -> String {
        format!("{}/api/admin/uploads/{}/reject", base, urlencoding::encode(id))
    }
}


#[cfg(test)]
mod tests {
    use super::endpoints;
    use crate::models::NoteQuery;

    #[test]
    fn test_notes_url_omits_blank_query_and_zero_skip() {
        let url = endpoints::notes("http://api", &NoteQuery::latest(12));
        assert_eq!(url, "http://api/api/notes?limit=12");

        let url = endpoints::notes(
            "http://api",
            &NoteQuery {
                limit: 12,
                skip: 24,
                q: Some("  ".into()),
            },
        );
        assert_eq!(url, "http://api/api/notes?limit=12&skip=24");
    }

    #[test]
    fn test_notes_url_encodes_query() {
        let url = endpoints::notes(
            "http://api",
            &NoteQuery {
                limit: 12,
                skip: 0,
                q: Some("org chem & more".into()),
            },
        );
        assert_eq!(url, "http://api/api/notes?limit=12&q=org%20chem%20%26%20more");
    }

    #[test]
    fn test_admin_paths() {
        assert_eq!(endpoints::normalize_base(" http://api/ "), "http://api");
        assert_eq!(
            endpoints::accept("http://api", "a/b"),
            "http://api/api/admin/uploads/a%2Fb/accept"
        );
        assert_eq!(
            endpoints::pending_uploads("http://api"),
            "http://api/api/admin/uploads?status=pending"
        );
    }
}
