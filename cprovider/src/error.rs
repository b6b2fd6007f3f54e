//! Client error kinds, helpers, and transport-text refinement.
//!
//! ```rust
//! use cprovider::ClientError;
//!
//! let auth = ClientError::authentication("bad key");
//! assert!(!auth.retryable);
//!
//! let quota = ClientError::quota_exceeded("slow down");
//! assert!(quota.retryable);
//! ```

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientErrorKind {
    NotInitialized,
    Authentication,
    QuotaExceeded,
    InvalidRequest,
    Timeout,
    Transport,
    Unavailable,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientError {
    pub kind: ClientErrorKind,
    pub message: String,
    pub retryable: bool,
}

/// Substrings in transport error text that identify a more specific failure
/// than the HTTP status alone conveys.
const AUTH_MARKERS: [&str; 3] = ["api key not valid", "invalid key", "api_key_invalid"];
const QUOTA_MARKERS: [&str; 3] = ["quota", "resource_exhausted", "rate limit"];

impl ClientError {
    pub fn new(kind: ClientErrorKind, message: impl Into<String>, retryable: bool) -> Self {
        Self {
            kind,
            message: message.into(),
            retryable,
        }
    }

    pub fn not_initialized(message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::NotInitialized, message, false)
    }

    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::Authentication, message, false)
    }

    pub fn quota_exceeded(message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::QuotaExceeded, message, true)
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::InvalidRequest, message, false)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::Timeout, message, true)
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::Transport, message, true)
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::Unavailable, message, true)
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::Other, message, false)
    }

    /// Re-raises a failure under a more specific kind when its text matches
    /// a known authentication or quota signature, with guidance the
    /// presentation layer can show verbatim.
    pub fn refine(self) -> Self {
        let lowered = self.message.to_ascii_lowercase();

        if AUTH_MARKERS.iter().any(|marker| lowered.contains(marker)) {
            return Self::authentication(format!(
                "the configured API key was rejected, update it in settings: {}",
                self.message
            ));
        }

        if QUOTA_MARKERS.iter().any(|marker| lowered.contains(marker)) {
            return Self::quota_exceeded(format!(
                "the API quota is exhausted, wait a moment before retrying: {}",
                self.message
            ));
        }

        self
    }
}

impl Display for ClientError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl Error for ClientError {}
