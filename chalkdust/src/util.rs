//! Small helpers for presentation-layer adapters.

use ccommon::{ChatMessage, Difficulty, Language};

/// Parses a UI language selection, falling back to the unknown sentinel the
/// session layer rejects.
pub fn parse_language(value: &str) -> Language {
    Language::from_name(value).unwrap_or(Language::Unknown)
}

/// Maps an uploaded filename to a language via its extension.
pub fn language_from_filename(filename: &str) -> Language {
    match filename.rsplit_once('.') {
        Some((_, extension)) => Language::from_extension(extension),
        None => Language::Unknown,
    }
}

pub fn parse_difficulty(value: &str) -> Option<Difficulty> {
    Difficulty::from_name(value)
}

pub fn user_message(content: impl Into<String>) -> ChatMessage {
    ChatMessage::user(content)
}

pub fn assistant_message(content: impl Into<String>) -> ChatMessage {
    ChatMessage::assistant(content)
}

#[cfg(test)]
mod tests {
    use ccommon::{ChatRole, Difficulty, Language};

    use super::*;

    #[test]
    fn language_parsing_falls_back_to_unknown() {
        assert_eq!(parse_language("TypeScript"), Language::TypeScript);
        assert_eq!(parse_language("klingon"), Language::Unknown);
    }

    #[test]
    fn filenames_resolve_through_their_extension() {
        assert_eq!(language_from_filename("main.rs"), Language::Rust);
        assert_eq!(language_from_filename("app.test.tsx"), Language::TypeScript);
        assert_eq!(language_from_filename("Makefile"), Language::Unknown);
    }

    #[test]
    fn difficulty_parsing_accepts_ui_labels() {
        assert_eq!(parse_difficulty("Easy"), Some(Difficulty::Easy));
        assert_eq!(parse_difficulty("medium"), Some(Difficulty::Intermediate));
        assert_eq!(parse_difficulty("expert"), None);
    }

    #[test]
    fn message_helpers_assign_roles() {
        assert_eq!(user_message("hi").role, ChatRole::User);
        assert_eq!(assistant_message("hello").role, ChatRole::Assistant);
    }
}
