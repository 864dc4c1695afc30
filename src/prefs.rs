//! Preference Storage
//!
//! Key-value persistence for client preferences. The language choice is the
//! only durable client state.

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::error::PreferenceError;

/// Durable key-value store for preferences
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;

    fn save(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// Process-local store; used in tests and as a fallback when no durable
/// storage is available
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<BTreeMap<String, String>>,
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for std::rc::Rc<S> {
    fn load(&self, key: &str) -> Option<String> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        (**self).save(key, value)
    }
}

#[cfg(feature = "native")]
pub use file::FileStore;

#[cfg(feature = "native")]
mod file {
    use super::*;
    use std::path::{Path, PathBuf};

    /// Preferences kept in a flat TOML table on disk
    #[derive(Debug, Clone)]
    pub struct FileStore {
        path: PathBuf,
    }

    impl FileStore {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        /// `<config dir>/notebuddy/preferences.toml`
        pub fn default_location() -> Option<Self> {
            crate::config::config_file("preferences.toml").map(Self::new)
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        fn read_all(&self) -> BTreeMap<String, String> {
            std::fs::read_to_string(&self.path)
                .ok()
                .and_then(|content| match toml::from_str(&content) {
                    Ok(values) => Some(values),
                    Err(e) => {
                        tracing::warn!("Ignoring unreadable preferences {:?}: {}", self.path, e);
                        None
                    }
                })
                .unwrap_or_default()
        }
    }

    impl PreferenceStore for FileStore {
        fn load(&self, key: &str) -> Option<String> {
            self.read_all().remove(key)
        }

        fn save(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
            let write_error = |error: String| PreferenceError::Write {
                key: key.to_string(),
                error,
            };

            let mut values = self.read_all();
            values.insert(key.to_string(), value.to_string());

            if let Some(parent) = self.path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| write_error(e.to_string()))?;
            }
            let content = toml::to_string(&values).map_err(|e| write_error(e.to_string()))?;
            std::fs::write(&self.path, content).map_err(|e| write_error(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::default();
        assert_eq!(store.load("lang"), None);

        store.save("lang", "ne").unwrap();
        assert_eq!(store.load("lang").as_deref(), Some("ne"));
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.toml");

        FileStore::new(&path).save("lang", "ne").unwrap();
        FileStore::new(&path).save("theme", "light").unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.load("lang").as_deref(), Some("ne"));
        assert_eq!(reopened.load("theme").as_deref(), Some("light"));
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_file_store_ignores_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");
        std::fs::write(&path, "not = [valid").unwrap();

        let store = FileStore::new(&path);
        assert_eq!(store.load("lang"), None);
        store.save("lang", "en").unwrap();
        assert_eq!(store.load("lang").as_deref(), Some("en"));
    }
}
