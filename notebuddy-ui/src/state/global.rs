//! Global Application State
//!
//! Reactive state shared by every page: the active language, the upload
//! dialog, the admin session and toast messages.

use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

use notebuddy::i18n::{translate, Key, Language, Localizer};
use notebuddy::views::{AdminState, UploadFlow};

use super::storage::WebStorage;
use crate::api::BrowserClient;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Active interface language, kept in sync by the localizer
    pub language: RwSignal<Language>,
    localizer: StoredValue<Rc<RefCell<Localizer<WebStorage>>>>,
    /// The contribute-notes dialog
    pub upload: RwSignal<UploadFlow>,
    pub language_picker_open: RwSignal<bool>,
    /// Admin session; lives for the tab, never persisted
    pub admin: RwSignal<AdminState>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let mut localizer = Localizer::new(WebStorage);
    let language = create_rw_signal(localizer.language());
    localizer.subscribe(move |lang| language.set(lang));

    let state = GlobalState {
        language,
        localizer: store_value(Rc::new(RefCell::new(localizer))),
        upload: create_rw_signal(UploadFlow::default()),
        language_picker_open: create_rw_signal(false),
        admin: create_rw_signal(AdminState::default()),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

/// Fetch the global state from context
pub fn use_global() -> GlobalState {
    expect_context::<GlobalState>()
}

impl GlobalState {
    /// Translated string; reactive when called inside a closure
    pub fn t(&self, key: Key) -> &'static str {
        translate(self.language.get(), key)
    }

    /// Translated string for event handlers and async tasks
    pub fn t_untracked(&self, key: Key) -> &'static str {
        translate(self.language.get_untracked(), key)
    }

    /// Switch language without reloading. Every `t` call re-renders through
    /// the language signal.
    pub fn set_language(&self, language: Language) {
        let result = self
            .localizer
            .with_value(|localizer| localizer.borrow_mut().set(language));

        if let Err(e) = result {
            log_error(&e.to_string());
            self.show_error(&e.to_string());
        }
    }

    pub fn api(&self) -> BrowserClient {
        BrowserClient::default()
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

/// Write a failure to the browser console
pub fn log_error(message: &str) {
    web_sys::console::error_1(&wasm_bindgen::JsValue::from_str(message));
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_language_switch_updates_signal() {
        let runtime = create_runtime();
        provide_global_state();
        let state = use_global();

        state.set_language(Language::Ne);
        assert_eq!(state.language.get_untracked(), Language::Ne);
        assert_eq!(translate(Language::Ne, Key::NavHome), "गृह");

        state.set_language(Language::En);
        runtime.dispose();
    }

    #[wasm_bindgen_test]
    fn test_admin_labels_follow_language() {
        let runtime = create_runtime();
        provide_global_state();
        let state = use_global();

        state.set_language(Language::En);
        assert_eq!(state.t_untracked(Key::SignIn), "Sign in");

        state.set_language(Language::Ne);
        assert_eq!(state.t_untracked(Key::SignIn), translate(Language::Ne, Key::SignIn));
        assert_ne!(state.t_untracked(Key::LogOut), "Log out");

        state.set_language(Language::En);
        runtime.dispose();
    }
}
