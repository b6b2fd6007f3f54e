//! The display preference set persisted between sessions.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    System,
}

impl Default for Theme {
    fn default() -> Self {
        Self::System
    }
}

/// Stored as one opaque JSON blob; unknown fields in older blobs fall back
/// to defaults rather than failing the load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayPreferences {
    pub theme: Theme,
    pub editor_font_size: u8,
    pub show_line_numbers: bool,
    pub preferred_language: Option<String>,
    pub preferred_difficulty: Option<String>,
}

impl Default for DisplayPreferences {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            editor_font_size: 14,
            show_line_numbers: true,
            preferred_language: None,
            preferred_difficulty: None,
        }
    }
}
