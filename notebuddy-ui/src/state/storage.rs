//! `localStorage`-backed preferences

use notebuddy::error::PreferenceError;
use notebuddy::prefs::PreferenceStore;

/// Preferences kept in the browser's `localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct WebStorage;

impl WebStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl PreferenceStore for WebStorage {
    fn load(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn save(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let storage = Self::storage().ok_or(PreferenceError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| PreferenceError::Write {
                key: key.to_string(),
                error: format!("{:?}", e),
            })
    }
}
