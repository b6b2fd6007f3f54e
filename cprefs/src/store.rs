//! Preference store trait and in-memory backend.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use ccommon::BoxFuture;

use crate::error::PrefsError;
use crate::sqlite::default_sqlite_path;

pub use crate::sqlite::SqlitePreferenceStore;

/// Injected persistence adapter: an opaque key to string-blob mapping, the
/// only storage contract the preference layer relies on.
pub trait PreferenceStore: Send + Sync {
    fn get<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Result<Option<String>, PrefsError>>;

    fn put<'a>(&'a self, key: &'a str, value: String) -> BoxFuture<'a, Result<(), PrefsError>>;

    fn remove<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Result<bool, PrefsError>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferenceStoreConfig {
    Sqlite { path: PathBuf },
    InMemory,
}

impl Default for PreferenceStoreConfig {
    fn default() -> Self {
        Self::Sqlite {
            path: default_sqlite_path(),
        }
    }
}

pub fn create_preference_store(
    config: PreferenceStoreConfig,
) -> Result<Arc<dyn PreferenceStore>, PrefsError> {
    match config {
        PreferenceStoreConfig::Sqlite { path } => Ok(Arc::new(SqlitePreferenceStore::new(path)?)),
        PreferenceStoreConfig::InMemory => Ok(Arc::new(InMemoryPreferenceStore::new())),
    }
}

#[derive(Debug, Default)]
pub struct InMemoryPreferenceStore {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, PrefsError> {
        self.entries
            .lock()
            .map_err(|_| PrefsError::storage("preference store lock poisoned"))
    }
}

impl PreferenceStore for InMemoryPreferenceStore {
    fn get<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Result<Option<String>, PrefsError>> {
        Box::pin(async move { Ok(self.guard()?.get(key).cloned()) })
    }

    fn put<'a>(&'a self, key: &'a str, value: String) -> BoxFuture<'a, Result<(), PrefsError>> {
        Box::pin(async move {
            self.guard()?.insert(key.to_string(), value);
            Ok(())
        })
    }

    fn remove<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Result<bool, PrefsError>> {
        Box::pin(async move { Ok(self.guard()?.remove(key).is_some()) })
    }
}
