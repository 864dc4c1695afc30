//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod carousel;
pub mod chips;
pub mod language;
pub mod loading;
pub mod nav;
pub mod note_card;
pub mod toast;
pub mod upload;

pub use carousel::ContributorsCarousel;
pub use chips::ChipRows;
pub use language::LanguagePicker;
pub use loading::{CardSkeleton, Loading};
pub use nav::{BottomNav, Header};
pub use note_card::NoteCard;
pub use toast::Toast;
pub use upload::UploadDialog;
