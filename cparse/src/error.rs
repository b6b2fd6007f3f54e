//! Parse-layer errors with diagnostic excerpts of the raw model output.

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    InvalidJson,
    MissingField,
    EmptyResponse,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    /// Truncated slice of the raw response text, kept for diagnosis.
    pub excerpt: String,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            excerpt: String::new(),
        }
    }

    pub fn invalid_json(message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::InvalidJson, message)
    }

    pub fn missing_field(field: &str) -> Self {
        Self::new(
            ParseErrorKind::MissingField,
            format!("required field {field:?} is missing or empty"),
        )
    }

    pub fn empty_response() -> Self {
        Self::new(ParseErrorKind::EmptyResponse, "model returned no usable text")
    }

    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.excerpt.is_empty() {
            write!(f, "{:?}: {}", self.kind, self.message)
        } else {
            write!(f, "{:?}: {} (excerpt: {:?})", self.kind, self.message, self.excerpt)
        }
    }
}

impl Error for ParseError {}
