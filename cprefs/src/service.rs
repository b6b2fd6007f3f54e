//! Preference service over an injected store.

use std::sync::Arc;

use crate::error::PrefsError;
use crate::store::PreferenceStore;
use crate::types::DisplayPreferences;

/// Key under which the display preference blob is stored.
pub const PREFERENCES_KEY: &str = "display-preferences";

#[derive(Clone)]
pub struct Preferences {
    store: Arc<dyn PreferenceStore>,
}

impl Preferences {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    pub async fn load(&self) -> Result<Option<DisplayPreferences>, PrefsError> {
        let Some(blob) = self.store.get(PREFERENCES_KEY).await? else {
            return Ok(None);
        };

        let preferences = serde_json::from_str(&blob).map_err(|error| {
            PrefsError::serialization(format!("stored preferences are corrupt: {error}"))
        })?;

        Ok(Some(preferences))
    }

    /// Missing or corrupt blobs fall back to defaults; preferences are not
    /// worth failing the UI over.
    pub async fn load_or_default(&self) -> DisplayPreferences {
        match self.load().await {
            Ok(Some(preferences)) => preferences,
            _ => DisplayPreferences::default(),
        }
    }

    pub async fn save(&self, preferences: &DisplayPreferences) -> Result<(), PrefsError> {
        let blob = serde_json::to_string(preferences).map_err(|error| {
            PrefsError::serialization(format!("preferences failed to serialize: {error}"))
        })?;

        self.store.put(PREFERENCES_KEY, blob).await
    }

    pub async fn reset(&self) -> Result<bool, PrefsError> {
        self.store.remove(PREFERENCES_KEY).await
    }
}
