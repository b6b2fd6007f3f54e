//! Preference-layer errors.

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefsErrorKind {
    Storage,
    Serialization,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefsError {
    pub kind: PrefsErrorKind,
    pub message: String,
}

impl PrefsError {
    pub fn new(kind: PrefsErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(PrefsErrorKind::Storage, message)
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(PrefsErrorKind::Serialization, message)
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::new(PrefsErrorKind::Other, message)
    }
}

impl Display for PrefsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl Error for PrefsError {}
