//! Upload Workflow
//!
//! Controlled form fields, validation and the submit lifecycle of the
//! "contribute notes" dialog.

use crate::api::NotesApi;
use crate::error::{ApiError, ApiResult, InputError};
use crate::models::UploadSubmission;

/// Raw form input, one string per field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadForm {
    pub title: String,
    pub class_level: String,
    pub college: String,
    pub subject: String,
    pub tags: String,
    pub pages: String,
    pub drive_link: String,
    pub contributor_name: String,
}

impl UploadForm {
    /// Check required fields and assemble the submission
    pub fn validate(&self) -> Result<UploadSubmission, InputError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(InputError::MissingField("title"));
        }
        let drive_link = self.drive_link.trim();
        if drive_link.is_empty() {
            return Err(InputError::MissingField("drive_link"));
        }

        let name = self.contributor_name.trim();

        Ok(UploadSubmission {
            title: title.to_string(),
            class_level: self.class_level.trim().to_string(),
            college: self.college.trim().to_string(),
            subject: self.subject.trim().to_string(),
            tags: parse_tags(&self.tags),
            pages: parse_pages(&self.pages)?,
            drive_link: drive_link.to_string(),
            contributor_name: (!name.is_empty()).then(|| name.to_string()),
        })
    }
}

/// Split comma-separated tags, trimming and dropping empty or repeated ones
pub fn parse_tags(input: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in input.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if !tags.iter().any(|existing| existing == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

/// Blank means "not given"; anything else must be a whole number
pub fn parse_pages(input: &str) -> Result<Option<u32>, InputError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    input
        .parse()
        .map(Some)
        .map_err(|_| InputError::InvalidNumber {
            field: "pages",
            value: input.to_string(),
        })
}

/// Result of a finished submission, ready to show the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Sent,
    /// The server refused the submission
    Rejected(String),
    /// The request never reached the server
    NetworkFailed(String),
}

impl UploadOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, UploadOutcome::Sent)
    }
}

impl From<&ApiResult<()>> for UploadOutcome {
    fn from(result: &ApiResult<()>) -> Self {
        match result {
            Ok(()) => UploadOutcome::Sent,
            Err(e @ ApiError::Network(_)) => UploadOutcome::NetworkFailed(e.user_message()),
            Err(e) => UploadOutcome::Rejected(e.user_message()),
        }
    }
}

/// Dialog state: open/closed, the form, and the in-flight guard
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadFlow {
    pub form: UploadForm,
    open: bool,
    submitting: bool,
}

impl UploadFlow {
    /// A closed dialog pre-filled with `form`
    pub fn with_form(form: UploadForm) -> Self {
        Self {
            form,
            ..Default::default()
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Closing keeps whatever was typed so far
    pub fn close(&mut self) {
        if !self.submitting {
            self.open = false;
        }
    }

    /// Validate and mark the flow as submitting.
    ///
    /// Returns `Ok(None)` while a submission is already in flight.
    pub fn start(&mut self) -> Result<Option<UploadSubmission>, InputError> {
        if self.submitting {
            return Ok(None);
        }
        let submission = self.form.validate()?;
        self.submitting = true;
        Ok(Some(submission))
    }

    /// Apply the backend's answer: success resets the form and closes the
    /// dialog, failure keeps both as they were
    pub fn finish(&mut self, result: &ApiResult<()>) -> UploadOutcome {
        self.submitting = false;
        let outcome = UploadOutcome::from(result);
        if outcome.is_success() {
            self.form = UploadForm::default();
            self.open = false;
        }
        outcome
    }
}

/// Validate, send and settle one submission
pub async fn submit<A>(api: &A, flow: &mut UploadFlow) -> Result<Option<UploadOutcome>, InputError>
where
    A: NotesApi + ?Sized,
{
    let Some(submission) = flow.start()? else {
        return Ok(None);
    };
    let result = api.submit_upload(&submission).await;
    if let Err(e) = &result {
        tracing::warn!("Upload submission failed: {}", e);
    }
    Ok(Some(flow.finish(&result)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{Call, FakeApi};

    fn filled() -> UploadForm {
        UploadForm {
            title: "  Organic Chemistry  ".into(),
            tags: "a, b ,,c".into(),
            pages: "24".into(),
            drive_link: "https://drive.google.com/file/d/abc/view".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_tags_are_trimmed_and_empty_pieces_dropped() {
        assert_eq!(parse_tags("a, b ,,c"), vec!["a", "b", "c"]);
        assert_eq!(parse_tags("x, x ,y"), vec!["x", "y"]);
        assert!(parse_tags(" , ").is_empty());
    }

    #[test]
    fn test_pages_parsing() {
        assert_eq!(parse_pages(""), Ok(None));
        assert_eq!(parse_pages(" 12 "), Ok(Some(12)));
        assert_eq!(parse_pages("0"), Ok(Some(0)));
        assert!(matches!(
            parse_pages("twelve"),
            Err(InputError::InvalidNumber { field: "pages", .. })
        ));
        assert!(parse_pages("-3").is_err());
    }

    #[test]
    fn test_required_fields() {
        let mut form = filled();
        form.title = "   ".into();
        assert_eq!(form.validate(), Err(InputError::MissingField("title")));

        let mut form = filled();
        form.drive_link.clear();
        assert_eq!(form.validate(), Err(InputError::MissingField("drive_link")));
    }

    #[test]
    fn test_validate_builds_submission() {
        let submission = filled().validate().unwrap();

        assert_eq!(submission.title, "Organic Chemistry");
        assert_eq!(submission.tags, vec!["a", "b", "c"]);
        assert_eq!(submission.pages, Some(24));
        assert_eq!(submission.contributor_name, None);
    }

    #[test]
    fn test_duplicate_submit_is_guarded() {
        let mut flow = UploadFlow::with_form(filled());

        assert!(flow.start().unwrap().is_some());
        assert!(flow.is_submitting());
        assert!(flow.start().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_success_resets_and_closes() {
        let api = FakeApi::default();
        let mut flow = UploadFlow::with_form(filled());
        flow.open();

        let outcome = submit(&api, &mut flow).await.unwrap();

        assert_eq!(outcome, Some(UploadOutcome::Sent));
        assert!(!flow.is_open());
        assert_eq!(flow.form, UploadForm::default());
        assert!(matches!(api.calls()[0], Call::Submit(_)));
    }

    #[tokio::test]
    async fn test_failures_are_distinguished_and_keep_form() {
        let api = FakeApi {
            fail_submit: Some(ApiError::rejected(400, r#"{"detail": "Link is not public"}"#)),
            ..Default::default()
        };
        let mut flow = UploadFlow::with_form(filled());
        flow.open();

        let outcome = submit(&api, &mut flow).await.unwrap();
        assert_eq!(outcome, Some(UploadOutcome::Rejected("Link is not public".into())));
        assert!(flow.is_open());
        assert!(!flow.is_submitting());
        assert_eq!(flow.form, filled());

        let network = UploadOutcome::from(&Err(ApiError::Network("refused".into())));
        assert!(matches!(network, UploadOutcome::NetworkFailed(_)));
    }

    #[test]
    fn test_with_form_starts_closed_and_idle() {
        let flow = UploadFlow::with_form(filled());

        assert_eq!(flow.form, filled());
        assert!(!flow.is_open());
        assert!(!flow.is_submitting());
    }

    #[tokio::test]
    async fn test_invalid_form_sends_nothing() {
        let api = FakeApi::default();
        let mut flow = UploadFlow::default();

        assert!(submit(&api, &mut flow).await.is_err());
        assert!(api.calls().is_empty());
        assert!(!flow.is_submitting());
    }
}
