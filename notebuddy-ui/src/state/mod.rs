//! State Management
//!
//! App-wide signals and the browser preference store.

pub mod global;
pub mod storage;
