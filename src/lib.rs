//! # NoteBuddy
//!
//! Client core for a community study-notes library: browse and search
//! notes, preview their documents, contribute new ones and review
//! submissions as an admin.
//!
//! ## Modules
//!
//! - [`api`]: the [`NotesApi`] backend seam and its endpoint table
//! - [`views`]: page state machines shared by the web UI and the CLI
//! - [`i18n`]: English / Nepali strings and the [`Localizer`]
//! - [`route`]: path to page mapping
//! - [`prefs`]: where the language preference is kept
//!
//! The `native` feature (on by default) adds the `reqwest` client, TOML
//! configuration and the `notebuddy` binary. The browser UI builds this crate
//! without it.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use notebuddy::{api::HttpClient, config::Config, views::load_home};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let api = HttpClient::new(&config.backend)?;
//!
//!     let feed = load_home(&api, config.backend.home_limit).await;
//!     for note in feed.notes? {
//!         println!("{} ({})", note.title, note.summary_line());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
#[cfg(feature = "native")]
pub mod config;
pub mod error;
pub mod i18n;
pub mod models;
pub mod prefs;
pub mod route;
pub mod views;

// Re-export top-level types for convenience
pub use api::NotesApi;

#[cfg(feature = "native")]
pub use api::HttpClient;

pub use error::{ApiError, ApiResult, InputError, PreferenceError};

pub use i18n::{Key, Language, Localizer};

pub use models::{
    Contributor, Credentials, Note, NoteQuery, PendingUpload, SessionToken, UploadSubmission,
};

pub use prefs::{MemoryStore, PreferenceStore};

pub use route::AppRoute;

#[cfg(feature = "native")]
pub use config::{BackendConfig, Config, ConfigError, LoggingConfig};
