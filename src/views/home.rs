//! Home View
//!
//! Latest notes and the contributor leaderboard, fetched together on mount.

use futures_util::future::join;

use crate::api::NotesApi;
use crate::error::ApiResult;
use crate::models::{Contributor, Note, NoteQuery};

/// Notes shown on the home feed
pub const HOME_NOTE_LIMIT: usize = 12;

/// College / class filter chips; the first one renders active
pub const LEVEL_CHIPS: [&str; 4] = ["LBA", "Other", "11", "12"];

/// Stream filter chips; none active
pub const STREAM_CHIPS: [&str; 4] = ["Science", "Management", "Law", "Languages"];

/// A row of display-only filter chips
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipRow {
    pub labels: &'static [&'static str],
    pub active: Option<usize>,
}

impl ChipRow {
    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }
}

/// Both chip rows as they appear on the home page. They do not filter the
/// feed.
pub fn chip_rows() -> [ChipRow; 2] {
    [
        ChipRow {
            labels: &LEVEL_CHIPS,
            active: Some(0),
        },
        ChipRow {
            labels: &STREAM_CHIPS,
            active: None,
        },
    ]
}

/// Results of the two home requests; each one succeeds or fails on its own
#[derive(Debug)]
pub struct HomeFeed {
    pub notes: ApiResult<Vec<Note>>,
    pub contributors: ApiResult<Vec<Contributor>>,
}

/// Fetch the latest notes and the leaderboard concurrently
pub async fn load_home<A>(api: &A, limit: usize) -> HomeFeed
where
    A: NotesApi + ?Sized,
{
    let query = NoteQuery::latest(limit);
    let (notes, contributors) = join(api.list_notes(&query), api.leaderboard()).await;

    if let Err(e) = &notes {
        tracing::warn!("Failed to load latest notes: {}", e);
    }
    if let Err(e) = &contributors {
        tracing::warn!("Failed to load leaderboard: {}", e);
    }

    HomeFeed {
        notes,
        contributors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{note, Call, FakeApi};
    use crate::error::ApiError;
    use crate::models::Contributor;

    fn contributor(name: &str, points: i64) -> Contributor {
        Contributor {
            id: None,
            name: name.to_string(),
            points,
        }
    }

    #[tokio::test]
    async fn test_home_requests_notes_and_leaderboard() {
        let api = FakeApi {
            notes: vec![note("1", "Optics"), note("2", "Waves")],
            contributors: vec![contributor("Asha", 40), contributor("Bikash", 25)],
            ..Default::default()
        };

        let feed = load_home(&api, HOME_NOTE_LIMIT).await;

        assert_eq!(feed.notes.unwrap().len(), 2);
        assert_eq!(feed.contributors.unwrap()[0].name, "Asha");

        let calls = api.calls();
        assert!(calls.contains(&Call::ListNotes(NoteQuery::latest(12))));
        assert!(calls.contains(&Call::Leaderboard));
    }

    #[tokio::test]
    async fn test_one_failure_does_not_blank_the_other() {
        let api = FakeApi {
            contributors: vec![contributor("Asha", 40)],
            ..Default::default()
        };
        api.note_pages
            .borrow_mut()
            .push_back(Err(ApiError::Network("offline".into())));

        let feed = load_home(&api, 12).await;

        assert!(feed.notes.is_err());
        assert_eq!(feed.contributors.unwrap().len(), 1);
    }

    /// Backend whose two home responses are released by the test
    struct GatedApi {
        notes: std::cell::RefCell<Option<tokio::sync::oneshot::Receiver<Vec<Note>>>>,
        board: std::cell::RefCell<Option<tokio::sync::oneshot::Receiver<Vec<Contributor>>>>,
    }

    #[async_trait::async_trait(?Send)]
    impl NotesApi for GatedApi {
        async fn list_notes(&self, _query: &NoteQuery) -> ApiResult<Vec<Note>> {
            let rx = self.notes.borrow_mut().take().unwrap();
            Ok(rx.await.unwrap())
        }

        async fn leaderboard(&self) -> ApiResult<Vec<Contributor>> {
            let rx = self.board.borrow_mut().take().unwrap();
            Ok(rx.await.unwrap())
        }

        async fn get_note(&self, _id: &str) -> ApiResult<Note> {
            unimplemented!()
        }

        async fn submit_upload(&self, _s: &crate::models::UploadSubmission) -> ApiResult<()> {
            unimplemented!()
        }

        async fn admin_login(
            &self,
            _c: &crate::models::Credentials,
        ) -> ApiResult<crate::models::SessionToken> {
            unimplemented!()
        }

        async fn pending_uploads(
            &self,
            _t: &crate::models::SessionToken,
        ) -> ApiResult<Vec<crate::models::PendingUpload>> {
            unimplemented!()
        }

        async fn accept_upload(
            &self,
            _t: &crate::models::SessionToken,
            _id: &str,
            _points: u32,
        ) -> ApiResult<()> {
            unimplemented!()
        }

        async fn reject_upload(
            &self,
            _t: &crate::models::SessionToken,
            _id: &str,
            _reason: &str,
        ) -> ApiResult<()> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn test_results_land_regardless_of_order() {
        let (notes_tx, notes_rx) = tokio::sync::oneshot::channel();
        let (board_tx, board_rx) = tokio::sync::oneshot::channel();
        let api = GatedApi {
            notes: std::cell::RefCell::new(Some(notes_rx)),
            board: std::cell::RefCell::new(Some(board_rx)),
        };

        // Leaderboard answers first, notes later
        let (feed, _) = tokio::join!(load_home(&api, 12), async move {
            board_tx.send(vec![contributor("Asha", 40)]).unwrap();
            tokio::task::yield_now().await;
            notes_tx.send(vec![note("1", "Optics")]).unwrap();
        });

        assert_eq!(feed.notes.unwrap()[0].title, "Optics");
        assert_eq!(feed.contributors.unwrap()[0].name, "Asha");
    }

    #[test]
    fn test_chip_rows() {
        let [levels, streams] = chip_rows();
        assert!(levels.is_active(0));
        assert!(!levels.is_active(1));
        assert_eq!(streams.active, None);
        assert_eq!(streams.labels[0], "Science");
    }
}
