//! Prompt-layer errors.

use std::error::Error;
use std::fmt::{Display, Formatter};

use ccommon::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptErrorKind {
    InvalidLanguage,
    InvalidRequest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptError {
    pub kind: PromptErrorKind,
    pub message: String,
}

impl PromptError {
    pub fn new(kind: PromptErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_language(language: Language) -> Self {
        Self::new(
            PromptErrorKind::InvalidLanguage,
            format!("prompts require a resolved language, got {language}"),
        )
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(PromptErrorKind::InvalidRequest, message)
    }
}

impl Display for PromptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl Error for PromptError {}
