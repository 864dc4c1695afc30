//! HTTP API Client
//!
//! [`NotesApi`] over `fetch`, for the browser build.

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use notebuddy::api::{endpoints, NotesApi, DEFAULT_API_BASE};
use notebuddy::error::{ApiError, ApiResult};
use notebuddy::models::{
    AcceptRequest, Contributor, Credentials, ListResponse, LoginResponse, Note, NoteQuery,
    PendingUpload, RejectRequest, SessionToken, UploadSubmission,
};

/// Local storage key overriding the backend URL
const API_URL_KEY: &str = "notebuddy_api_url";

/// Backend URL baked in at build time, if any
fn build_time_base() -> &'static str {
    option_env!("NOTEBUDDY_BACKEND_URL").unwrap_or(DEFAULT_API_BASE)
}

/// Get the API base URL from local storage or use the build-time default
fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .filter(|url| !url.trim().is_empty());

    endpoints::normalize_base(stored.as_deref().unwrap_or(build_time_base()))
}

/// Browser backend client. Cheap to create; holds only the base URL.
#[derive(Debug, Clone)]
pub struct BrowserClient {
    base_url: String,
}

impl Default for BrowserClient {
    fn default() -> Self {
        Self::new(get_api_base())
    }
}

impl BrowserClient {
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            base_url: endpoints::normalize_base(base_url.as_ref()),
        }
    }

    async fn send(&self, request: Request) -> ApiResult<Response> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::rejected(response.status(), &body));
        }
        Ok(response)
    }

    async fn get<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ApiResult<T> {
        let request = builder
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = self.send(request).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn post<B: Serialize>(&self, builder: RequestBuilder, body: &B) -> ApiResult<Response> {
        let request = builder
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        self.send(request).await
    }
}

fn authed(builder: RequestBuilder, token: &SessionToken) -> RequestBuilder {
    builder.header("Authorization", &token.bearer())
}

#[async_trait(?Send)]
impl NotesApi for BrowserClient {
    async fn list_notes(&self, query: &NoteQuery) -> ApiResult<Vec<Note>> {
        let list: ListResponse<Note> = self
            .get(Request::get(&endpoints::notes(&self.base_url, query)))
            .await?;
        Ok(list.items)
    }

    async fn get_note(&self, id: &str) -> ApiResult<Note> {
        self.get(Request::get(&endpoints::note(&self.base_url, id)))
            .await
    }

    async fn leaderboard(&self) -> ApiResult<Vec<Contributor>> {
        let list: ListResponse<Contributor> = self
            .get(Request::get(&endpoints::leaderboard(&self.base_url)))
            .await?;
        Ok(list.items)
    }

    async fn submit_upload(&self, submission: &UploadSubmission) -> ApiResult<()> {
        self.post(Request::post(&endpoints::uploads(&self.base_url)), submission)
            .await?;
        Ok(())
    }

    async fn admin_login(&self, credentials: &Credentials) -> ApiResult<SessionToken> {
        let response = self
            .post(
                Request::post(&endpoints::admin_login(&self.base_url)),
                credentials,
            )
            .await?;
        let login: LoginResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        login
            .token
            .filter(|token| !token.is_empty())
            .map(SessionToken::new)
            .ok_or_else(|| ApiError::Rejected {
                status: response.status(),
                detail: Some("Login failed".to_string()),
            })
    }

    async fn pending_uploads(&self, token: &SessionToken) -> ApiResult<Vec<PendingUpload>> {
        let builder = authed(
            Request::get(&endpoints::pending_uploads(&self.base_url)),
            token,
        );
        let list: ListResponse<PendingUpload> = self.get(builder).await?;
        Ok(list.items)
    }

    async fn accept_upload(&self, token: &SessionToken, id: &str, points: u32) -> ApiResult<()> {
        let builder = authed(Request::post(&endpoints::accept(&self.base_url, id)), token);
        self.post(
            builder,
            &AcceptRequest {
                assigned_points: points,
            },
        )
        .await?;
        Ok(())
    }

    async fn reject_upload(&self, token: &SessionToken, id: &str, reason: &str) -> ApiResult<()> {
        let builder = authed(Request::post(&endpoints::reject(&self.base_url, id)), token);
        self.post(builder, &RejectRequest { reason }).await?;
        Ok(())
    }
}
