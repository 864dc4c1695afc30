//! Page view-models
//!
//! Framework-free state and workflows behind each page. The browser UI binds
//! them to signals; the CLI drives them directly.

pub mod admin;
pub mod home;
pub mod leaderboard;
pub mod search;
pub mod upload;
pub mod viewer;

pub use admin::{
    parse_points, AdminConsole, AdminSession, AdminState, ReviewAction, ReviewDecision,
    ReviewPrompt,
};
pub use home::{chip_rows, load_home, ChipRow, HomeFeed, HOME_NOTE_LIMIT};
pub use leaderboard::{ranked, Ranked};
pub use search::{SearchRequest, SearchState, PAGE_SIZE};
pub use upload::{parse_pages, parse_tags, UploadFlow, UploadForm, UploadOutcome};
pub use viewer::{document_link, download_url, drive_file_id, DocumentViewer, PreviewStatus};
