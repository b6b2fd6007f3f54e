//! Display preference persistence behind an injected key-value adapter.
//!
//! ```rust
//! use cprefs::{DisplayPreferences, Theme};
//!
//! let defaults = DisplayPreferences::default();
//! assert_eq!(defaults.theme, Theme::System);
//! assert!(defaults.show_line_numbers);
//! ```

mod error;
mod service;
mod sqlite;
mod store;
mod types;

pub use error::{PrefsError, PrefsErrorKind};
pub use service::{PREFERENCES_KEY, Preferences};
pub use store::{
    InMemoryPreferenceStore, PreferenceStore, PreferenceStoreConfig, SqlitePreferenceStore,
    create_preference_store,
};
pub use types::{DisplayPreferences, Theme};

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn sample() -> DisplayPreferences {
        DisplayPreferences {
            theme: Theme::Dark,
            editor_font_size: 16,
            show_line_numbers: false,
            preferred_language: Some("python".to_string()),
            preferred_difficulty: Some("hard".to_string()),
        }
    }

    #[tokio::test]
    async fn preferences_round_trip_through_the_in_memory_store() {
        let service = Preferences::new(Arc::new(InMemoryPreferenceStore::new()));

        assert_eq!(service.load().await.expect("load should work"), None);

        service.save(&sample()).await.expect("save should work");
        assert_eq!(service.load().await.expect("load should work"), Some(sample()));

        assert!(service.reset().await.expect("reset should work"));
        assert_eq!(service.load().await.expect("load should work"), None);
    }

    #[tokio::test]
    async fn preferences_round_trip_through_sqlite() {
        let dir = tempfile::tempdir().expect("temp dir should create");
        let path = dir.path().join("nested").join("preferences.sqlite3");

        let store = Arc::new(SqlitePreferenceStore::new(&path).expect("store should open"));
        let service = Preferences::new(store);

        service.save(&sample()).await.expect("save should work");
        assert_eq!(service.load().await.expect("load should work"), Some(sample()));

        // Reopen the same file; the blob must survive the connection.
        let reopened = Preferences::new(Arc::new(
            SqlitePreferenceStore::new(&path).expect("store should reopen"),
        ));
        assert_eq!(
            reopened.load().await.expect("load should work"),
            Some(sample())
        );
    }

    #[tokio::test]
    async fn corrupt_blobs_error_on_load_and_default_on_load_or_default() {
        let store = Arc::new(InMemoryPreferenceStore::new());
        store
            .put(PREFERENCES_KEY, "{not json".to_string())
            .await
            .expect("put should work");

        let service = Preferences::new(store);
        let error = service.load().await.expect_err("corrupt blob must fail");
        assert_eq!(error.kind, PrefsErrorKind::Serialization);

        assert_eq!(service.load_or_default().await, DisplayPreferences::default());
    }

    #[tokio::test]
    async fn older_blobs_with_missing_fields_still_load() {
        let store = Arc::new(InMemoryPreferenceStore::new());
        store
            .put(PREFERENCES_KEY, r#"{"theme":"dark"}"#.to_string())
            .await
            .expect("put should work");

        let service = Preferences::new(store);
        let loaded = service.load().await.expect("load should work").expect("blob present");
        assert_eq!(loaded.theme, Theme::Dark);
        assert_eq!(loaded.editor_font_size, 14);
    }

    #[test]
    fn sqlite_in_memory_store_initializes_its_schema() {
        assert!(SqlitePreferenceStore::new_in_memory().is_ok());
    }
}
