//! Session-layer errors and classification.

use std::error::Error;
use std::fmt::{Display, Formatter};

use ccommon::{Language, RequestKind};
use cparse::ParseError;
use cprovider::{ClientError, ClientErrorKind};

use crate::SubmissionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionErrorKind {
    InvalidLanguage,
    InvalidRequest,
    NotInitialized,
    Transport,
    MalformedResponse,
    Superseded,
    Store,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionError {
    pub kind: SessionErrorKind,
    pub message: String,
}

impl SessionError {
    pub fn new(kind: SessionErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_language(language: Language) -> Self {
        Self::new(
            SessionErrorKind::InvalidLanguage,
            format!("a resolved language is required, got {language}"),
        )
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(SessionErrorKind::InvalidRequest, message)
    }

    pub fn not_initialized(message: impl Into<String>) -> Self {
        Self::new(SessionErrorKind::NotInitialized, message)
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(SessionErrorKind::Transport, message)
    }

    /// Wraps a parse failure with the request kind that triggered it.
    pub fn malformed(kind: RequestKind, error: ParseError) -> Self {
        Self::new(
            SessionErrorKind::MalformedResponse,
            format!("{kind} response could not be parsed: {error}"),
        )
    }

    pub fn superseded(id: SubmissionId) -> Self {
        Self::new(
            SessionErrorKind::Superseded,
            format!("submission {id} was replaced before its result arrived"),
        )
    }

    pub fn store(message: impl Into<String>) -> Self {
        Self::new(SessionErrorKind::Store, message)
    }
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl Error for SessionError {}

impl From<ClientError> for SessionError {
    fn from(value: ClientError) -> Self {
        match value.kind {
            ClientErrorKind::NotInitialized => SessionError::not_initialized(value.message),
            ClientErrorKind::InvalidRequest => SessionError::invalid_request(value.message),
            _ => SessionError::transport(value.to_string()),
        }
    }
}

impl From<cprompt::PromptError> for SessionError {
    fn from(value: cprompt::PromptError) -> Self {
        match value.kind {
            cprompt::PromptErrorKind::InvalidLanguage => {
                SessionError::new(SessionErrorKind::InvalidLanguage, value.message)
            }
            cprompt::PromptErrorKind::InvalidRequest => {
                SessionError::invalid_request(value.message)
            }
        }
    }
}
