//! Admin Review
//!
//! Session, pending-upload list and the accept/reject dialog of the admin
//! panel. The panel renders the login form for [`AdminSession::LoggedOut`]
//! and the review list for [`AdminSession::LoggedIn`], nothing in between.

use crate::api::NotesApi;
use crate::error::{ApiError, ApiResult, InputError};
use crate::models::{Credentials, PendingUpload, SessionToken};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AdminSession {
    #[default]
    LoggedOut,
    LoggedIn(SessionToken),
}

/// Everything the admin panel shows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminState {
    session: AdminSession,
    pending: Vec<PendingUpload>,
    error: Option<String>,
}

impl AdminState {
    pub fn session(&self) -> &AdminSession {
        &self.session
    }

    pub fn token(&self) -> Option<&SessionToken> {
        match &self.session {
            AdminSession::LoggedIn(token) => Some(token),
            AdminSession::LoggedOut => None,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.token().is_some()
    }

    pub fn pending(&self) -> &[PendingUpload] {
        &self.pending
    }

    /// Inline error from the last failed action
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn signed_in(&mut self, token: SessionToken) {
        self.session = AdminSession::LoggedIn(token);
        self.error = None;
    }

    /// Login failed: stay logged out with nothing listed
    pub fn login_failed(&mut self, error: &ApiError) {
        self.session = AdminSession::LoggedOut;
        self.pending.clear();
        self.error = Some(error.user_message());
    }

    pub fn set_pending(&mut self, items: Vec<PendingUpload>) {
        if self.is_logged_in() {
            self.pending = items;
        }
    }

    /// A review went through: drop the item from the list
    pub fn reviewed(&mut self, id: &str) {
        self.pending.retain(|item| item.id != id);
        self.error = None;
    }

    /// A request failed; the list stays as it was
    pub fn failed(&mut self, error: &ApiError) {
        self.error = Some(error.user_message());
    }

    pub fn sign_out(&mut self) {
        *self = Self::default();
    }
}

/// Points awarded on acceptance. Zero is a valid award.
pub fn parse_points(input: &str) -> Result<u32, InputError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(InputError::MissingField("points"));
    }
    input.parse().map_err(|_| InputError::InvalidNumber {
        field: "points",
        value: input.to_string(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewAction {
    Accept,
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewDecision {
    Accept { points: u32 },
    Reject { reason: String },
}

/// The non-blocking dialog collecting points or a reason for one upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewPrompt {
    pub upload_id: String,
    pub action: ReviewAction,
    /// Points for accept, reason for reject
    pub input: String,
}

impl ReviewPrompt {
    pub fn accept(upload_id: impl Into<String>) -> Self {
        Self {
            upload_id: upload_id.into(),
            action: ReviewAction::Accept,
            input: String::new(),
        }
    }

    pub fn reject(upload_id: impl Into<String>) -> Self {
        Self {
            upload_id: upload_id.into(),
            action: ReviewAction::Reject,
            input: String::new(),
        }
    }

    /// Turn the dialog input into a decision. An empty reason is allowed.
    pub fn confirm(&self) -> Result<ReviewDecision, InputError> {
        match self.action {
            ReviewAction::Accept => Ok(ReviewDecision::Accept {
                points: parse_points(&self.input)?,
            }),
            ReviewAction::Reject => Ok(ReviewDecision::Reject {
                reason: self.input.trim().to_string(),
            }),
        }
    }
}

/// Send one review decision
pub async fn review<A>(
    api: &A,
    token: &SessionToken,
    upload_id: &str,
    decision: &ReviewDecision,
) -> ApiResult<()>
where
    A: NotesApi + ?Sized,
{
    match decision {
        ReviewDecision::Accept { points } => api.accept_upload(token, upload_id, *points).await,
        ReviewDecision::Reject { reason } => api.reject_upload(token, upload_id, reason).await,
    }
}

/// Drives an [`AdminState`] against a backend, one awaited call at a time
pub struct AdminConsole<'a, A: NotesApi + ?Sized> {
    api: &'a A,
    state: AdminState,
}

impl<'a, A: NotesApi + ?Sized> AdminConsole<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self {
            api,
            state: AdminState::default(),
        }
    }

    pub fn state(&self) -> &AdminState {
        &self.state
    }

    /// Log in and fetch the pending list straight away
    pub async fn login(&mut self, credentials: &Credentials) -> ApiResult<()> {
        match self.api.admin_login(credentials).await {
            Ok(token) => {
                tracing::info!(username = %credentials.username, "Admin logged in");
                self.state.signed_in(token);
                self.refresh().await
            }
            Err(e) => {
                tracing::warn!(username = %credentials.username, "Admin login failed: {}", e);
                self.state.login_failed(&e);
                Err(e)
            }
        }
    }

    pub async fn refresh(&mut self) -> ApiResult<()> {
        let Some(token) = self.state.token().cloned() else {
            return Ok(());
        };
        match self.api.pending_uploads(&token).await {
            Ok(items) => {
                tracing::debug!(count = items.len(), "Loaded pending uploads");
                self.state.set_pending(items);
                Ok(())
            }
            Err(e) => {
                self.state.failed(&e);
                Err(e)
            }
        }
    }

    /// Apply a confirmed dialog. Does nothing when logged out.
    pub async fn decide(&mut self, upload_id: &str, decision: &ReviewDecision) -> ApiResult<()> {
        let Some(token) = self.state.token().cloned() else {
            return Ok(());
        };
        match review(self.api, &token, upload_id, decision).await {
            Ok(()) => {
                tracing::info!(upload_id, ?decision, "Upload reviewed");
                self.state.reviewed(upload_id);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(upload_id, "Review failed: {}", e);
                self.state.failed(&e);
                Err(e)
            }
        }
    }

    pub fn logout(&mut self) {
        self.state.sign_out();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{pending, Call, FakeApi};

    fn backend() -> FakeApi {
        FakeApi {
            pending: vec![pending("u1"), pending("u2")],
            password: "secret".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_points_parsing() {
        assert_eq!(parse_points("0"), Ok(0));
        assert_eq!(parse_points(" 15 "), Ok(15));
        assert_eq!(parse_points(""), Err(InputError::MissingField("points")));
        assert!(parse_points("ten").is_err());
        assert!(parse_points("-1").is_err());
    }

    #[test]
    fn test_reject_prompt_allows_empty_reason() {
        let prompt = ReviewPrompt::reject("u1");
        assert_eq!(
            prompt.confirm(),
            Ok(ReviewDecision::Reject {
                reason: String::new()
            })
        );
    }

    #[test]
    fn test_accept_prompt_blocks_blank_points() {
        let mut prompt = ReviewPrompt::accept("u1");
        assert!(prompt.confirm().is_err());

        prompt.input = "0".into();
        assert_eq!(prompt.confirm(), Ok(ReviewDecision::Accept { points: 0 }));
    }

    #[tokio::test]
    async fn test_login_fetches_pending() {
        let api = backend();
        let mut console = AdminConsole::new(&api);

        console
            .login(&Credentials::new("admin", "secret"))
            .await
            .unwrap();

        assert!(console.state().is_logged_in());
        assert_eq!(console.state().pending().len(), 2);
        assert_eq!(
            api.calls(),
            vec![Call::Login("admin".into()), Call::Pending("token-1".into())]
        );
    }

    #[tokio::test]
    async fn test_wrong_credentials_stay_logged_out() {
        let api = backend();
        let mut console = AdminConsole::new(&api);

        let result = console.login(&Credentials::new("admin", "nope")).await;

        assert!(result.is_err());
        let state = console.state();
        assert_eq!(state.session(), &AdminSession::LoggedOut);
        assert!(state.token().is_none());
        assert!(state.pending().is_empty());
        assert_eq!(state.error(), Some("Invalid credentials"));
        assert_eq!(api.calls(), vec![Call::Login("admin".into())]);
    }

    #[tokio::test]
    async fn test_accept_zero_points_is_sent() {
        let api = backend();
        let mut console = AdminConsole::new(&api);
        console
            .login(&Credentials::new("admin", "secret"))
            .await
            .unwrap();

        let decision = ReviewPrompt {
            input: "0".into(),
            ..ReviewPrompt::accept("u1")
        }
        .confirm()
        .unwrap();
        console.decide("u1", &decision).await.unwrap();

        assert!(api.calls().contains(&Call::Accept {
            token: "token-1".into(),
            id: "u1".into(),
            points: 0,
        }));
        let ids: Vec<_> = console.state().pending().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["u2"]);
    }

    #[tokio::test]
    async fn test_failed_accept_keeps_item() {
        let api = backend();
        let mut console = AdminConsole::new(&api);
        console
            .login(&Credentials::new("admin", "secret"))
            .await
            .unwrap();
        *api.fail_next_review.borrow_mut() = Some(ApiError::Network("offline".into()));

        let result = console
            .decide("u1", &ReviewDecision::Accept { points: 5 })
            .await;

        assert!(result.is_err());
        assert_eq!(console.state().pending().len(), 2);
        assert!(console.state().error().is_some());
    }

    #[tokio::test]
    async fn test_reject_with_empty_reason() {
        let api = backend();
        let mut console = AdminConsole::new(&api);
        console
            .login(&Credentials::new("admin", "secret"))
            .await
            .unwrap();

        console
            .decide(
                "u2",
                &ReviewDecision::Reject {
                    reason: String::new(),
                },
            )
            .await
            .unwrap();

        assert!(api.calls().contains(&Call::Reject {
            token: "token-1".into(),
            id: "u2".into(),
            reason: String::new(),
        }));
        assert_eq!(console.state().pending().len(), 1);
    }

    #[tokio::test]
    async fn test_logout_drops_token_and_list() {
        let api = backend();
        let mut console = AdminConsole::new(&api);
        console
            .login(&Credentials::new("admin", "secret"))
            .await
            .unwrap();

        console.logout();

        assert!(!console.state().is_logged_in());
        assert!(console.state().pending().is_empty());

        // Nothing is sent without a session
        console
            .decide("u1", &ReviewDecision::Accept { points: 1 })
            .await
            .unwrap();
        assert!(!api
            .calls()
            .iter()
            .any(|call| matches!(call, Call::Accept { .. })));
    }
}
