//! Pages
//!
//! One component per route.

pub mod about;
pub mod admin;
pub mod contributions;
pub mod home;
pub mod note;
pub mod search;

pub use about::About;
pub use admin::Admin;
pub use contributions::Contributions;
pub use home::Home;
pub use note::NoteDetail;
pub use search::Search;
