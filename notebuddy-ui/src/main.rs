//! NoteBuddy Web
//!
//! Student notes library built with Leptos (WASM).
//!
//! # Features
//!
//! - Latest uploads and top contributors on the home page
//! - Search with incremental "load more"
//! - In-page document preview with zoom and paging
//! - Note contribution and an unlisted admin review panel
//! - English / Nepali interface
//!
//! # Architecture
//!
//! Client-side rendered (CSR) Leptos application compiled to WebAssembly.
//! Page state lives in the `notebuddy` core crate; this crate binds it to
//! signals and talks to the backend over HTTP.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
