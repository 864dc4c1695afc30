//! Native HTTP Client
//!
//! `reqwest` implementation of [`NotesApi`] used by the command-line front end.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::{endpoints, NotesApi};
use crate::config::BackendConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{
    AcceptRequest, Contributor, Credentials, ListResponse, LoginResponse, Note, NoteQuery,
    PendingUpload, RejectRequest, SessionToken, UploadSubmission,
};

/// Notes backend client over `reqwest`
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a client for the configured backend
    pub fn new(config: &BackendConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| ApiError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: endpoints::normalize_base(&config.url),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a request and turn transport failures and non-success statuses
    /// into [`ApiError`]s
    async fn send(&self, request: RequestBuilder) -> ApiResult<Response> {
        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Network("Request timed out".to_string())
            } else {
                ApiError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), body = %body, "Request rejected");
            Err(ApiError::rejected(status.as_u16(), &body))
        }
    }

    async fn json<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let response = self.send(request).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn authed(&self, request: RequestBuilder, token: &SessionToken) -> RequestBuilder {
        request.bearer_auth(token.as_str())
    }
}

#[async_trait(?Send)]
impl NotesApi for HttpClient {
    async fn list_notes(&self, query: &NoteQuery) -> ApiResult<Vec<Note>> {
        let url = endpoints::notes(&self.base_url, query);
        tracing::debug!(%url, "Listing notes");

        let list: ListResponse<Note> = self.json(self.client.get(&url)).await?;
        Ok(list.items)
    }

    async fn get_note(&self, id: &str) -> ApiResult<Note> {
        let url = endpoints::note(&self.base_url, id);
        self.json(self.client.get(&url)).await
    }

    async fn leaderboard(&self) -> ApiResult<Vec<Contributor>> {
        let url = endpoints::leaderboard(&self.base_url);
        let list: ListResponse<Contributor> = self.json(self.client.get(&url)).await?;
        Ok(list.items)
    }

    async fn submit_upload(&self, submission: &UploadSubmission) -> ApiResult<()> {
        let url = endpoints::uploads(&self.base_url);
        tracing::debug!(title = %submission.title, "Submitting upload");

        self.send(self.client.post(&url).json(submission)).await?;
        Ok(())
    }

    async fn admin_login(&self, credentials: &Credentials) -> ApiResult<SessionToken> {
        let url = endpoints::admin_login(&self.base_url);
        tracing::debug!(username = %credentials.username, "Admin login");

        let login: LoginResponse = self.json(self.client.post(&url).json(credentials)).await?;
        login
            .token
            .filter(|token| !token.is_empty())
            .map(SessionToken::new)
            .ok_or(ApiError::Rejected {
                status: 200,
                detail: Some("Login failed".to_string()),
            })
    }

    async fn pending_uploads(&self, token: &SessionToken) -> ApiResult<Vec<PendingUpload>> {
        let url = endpoints::pending_uploads(&self.base_url);
        let list: ListResponse<PendingUpload> =
            self.json(self.authed(self.client.get(&url), token)).await?;
        Ok(list.items)
    }

    async fn accept_upload(&self, token: &SessionToken, id: &str, points: u32) -> ApiResult<()> {
        let url = endpoints::accept(&self.base_url, id);
        let body = AcceptRequest {
            assigned_points: points,
        };

        self.send(self.authed(self.client.post(&url), token).json(&body))
            .await?;
        Ok(())
    }

    async fn reject_upload(&self, token: &SessionToken, id: &str, reason: &str) -> ApiResult<()> {
        let url = endpoints::reject(&self.base_url, id);
        let body = RejectRequest { reason };

        self.send(self.authed(self.client.post(&url), token).json(&body))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::{Path, Query},
        http::{HeaderMap, StatusCode},
        routing::{get, post},
        Json, Router,
    };
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    type Seen = Arc<Mutex<Vec<Value>>>;

    /// Spawn a stub backend on an ephemeral port and return a client for it
    async fn stub_backend(seen: Seen) -> HttpClient {
        let accept_seen = seen.clone();
        let upload_seen = seen.clone();

        let app = Router::new()
            .route(
                "/api/notes",
                get(|Query(params): Query<HashMap<String, String>>| async move {
                    Json(json!({
                        "items": [{
                            "id": 1,
                            "title": format!("q={:?} skip={:?}", params.get("q"), params.get("skip")),
                            "subject": "Physics"
                        }]
                    }))
                }),
            )
            .route(
                "/api/notes/:id",
                get(|Path(id): Path<String>| async move {
                    if id == "missing" {
                        (StatusCode::NOT_FOUND, Json(json!({"detail": "Note not found"})))
                    } else {
                        (StatusCode::OK, Json(json!({"id": id, "title": "Found", "pages": 4})))
                    }
                }),
            )
            .route(
                "/api/leaderboard",
                get(|| async { Json(json!({"items": [{"name": "Asha", "points": 50}]})) }),
            )
            .route(
                "/api/uploads",
                post(move |Json(body): Json<Value>| {
                    let seen = upload_seen.clone();
                    async move {
                        seen.lock().unwrap().push(body);
                        Json(json!({"ok": true}))
                    }
                }),
            )
            .route(
                "/api/admin/login",
                post(|Json(body): Json<Value>| async move {
                    if body["password"] == "secret" {
                        Json(json!({"token": "tok-9"}))
                    } else {
                        Json(json!({"error": "bad credentials"}))
                    }
                }),
            )
            .route(
                "/api/admin/uploads",
                get(|headers: HeaderMap| async move {
                    let auth = headers
                        .get("authorization")
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default()
                        .to_string();
                    if auth == "Bearer tok-9" {
                        (StatusCode::OK, Json(json!({"items": [{"id": "p1", "title": "Pending"}]})))
                    } else {
                        (StatusCode::UNAUTHORIZED, Json(json!({"detail": "Not authenticated"})))
                    }
                }),
            )
            .route(
                "/api/admin/uploads/:id/accept",
                post(move |Path(id): Path<String>, Json(body): Json<Value>| {
                    let seen = accept_seen.clone();
                    async move {
                        seen.lock().unwrap().push(json!({"id": id, "body": body}));
                        Json(json!({"ok": true}))
                    }
                }),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        HttpClient::new(&BackendConfig {
            url: format!("http://{}/", addr),
            ..BackendConfig::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_list_notes_passes_query_and_skip() {
        let client = stub_backend(Seen::default()).await;

        let notes = client
            .list_notes(&NoteQuery {
                limit: 12,
                skip: 12,
                q: Some("organic chem".into()),
            })
            .await
            .unwrap();

        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].id, "1");
        assert_eq!(notes[0].title, r#"q=Some("organic chem") skip=Some("12")"#);
    }

    #[tokio::test]
    async fn test_get_note_and_not_found() {
        let client = stub_backend(Seen::default()).await;

        let note = client.get_note("n7").await.unwrap();
        assert_eq!(note.pages, Some(4));

        let err = client.get_note("missing").await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Rejected {
                status: 404,
                detail: Some("Note not found".into())
            }
        );
    }

    #[tokio::test]
    async fn test_leaderboard_and_upload() {
        let seen = Seen::default();
        let client = stub_backend(seen.clone()).await;

        let board = client.leaderboard().await.unwrap();
        assert_eq!(board[0].name, "Asha");

        let submission = UploadSubmission {
            title: "Calculus".into(),
            tags: vec!["limits".into()],
            drive_link: "https://drive.google.com/file/d/x/view".into(),
            ..Default::default()
        };
        client.submit_upload(&submission).await.unwrap();

        let bodies = seen.lock().unwrap();
        assert_eq!(bodies[0]["title"], "Calculus");
        assert_eq!(bodies[0]["tags"], json!(["limits"]));
    }

    #[tokio::test]
    async fn test_login_without_token_is_rejected() {
        let client = stub_backend(Seen::default()).await;

        let err = client
            .admin_login(&Credentials::new("admin", "wrong"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Rejected { .. }));

        let token = client
            .admin_login(&Credentials::new("admin", "secret"))
            .await
            .unwrap();
        assert_eq!(token.as_str(), "tok-9");
    }

    #[tokio::test]
    async fn test_admin_requests_carry_bearer_token() {
        let seen = Seen::default();
        let client = stub_backend(seen.clone()).await;

        let err = client
            .pending_uploads(&SessionToken::new("stale"))
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), "Not authenticated");

        let token = SessionToken::new("tok-9");
        let pending = client.pending_uploads(&token).await.unwrap();
        assert_eq!(pending[0].id, "p1");

        client.accept_upload(&token, "p1", 0).await.unwrap();
        let bodies = seen.lock().unwrap();
        assert_eq!(bodies[0], json!({"id": "p1", "body": {"assigned_points": 0}}));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_network_error() {
        let client = HttpClient::new(&BackendConfig {
            url: "http://127.0.0.1:9".to_string(),
            request_timeout_secs: 2,
            ..BackendConfig::default()
        })
        .unwrap();

        let err = client.leaderboard().await.unwrap_err();
        assert!(err.is_network());
    }
}
