//! Completion request and response types shared by client implementations.
//!
//! ```rust
//! use cprovider::{ClientErrorKind, CompletionRequest};
//!
//! let ok = CompletionRequest::new("gemini-2.5-flash", "Explain closures.");
//! assert!(ok.validate().is_ok());
//!
//! let err = CompletionRequest::new("", "hi").validate().expect_err("empty model should fail");
//! assert_eq!(err.kind, ClientErrorKind::InvalidRequest);
//! ```

use ccommon::GenerationOptions;

use crate::ClientError;

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub prompt: String,
    pub options: GenerationOptions,
}

impl CompletionRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            options: GenerationOptions::default(),
        }
    }

    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }

    pub fn validate(&self) -> Result<(), ClientError> {
        if self.model.trim().is_empty() {
            return Err(ClientError::invalid_request("model must not be empty"));
        }

        if self.prompt.trim().is_empty() {
            return Err(ClientError::invalid_request("prompt must not be blank"));
        }

        if let Some(max_output_tokens) = self.options.max_output_tokens
            && max_output_tokens == 0
        {
            return Err(ClientError::invalid_request(
                "max_output_tokens must be greater than zero",
            ));
        }

        if let Some(temperature) = self.options.temperature
            && !(0.0..=2.0).contains(&temperature)
        {
            return Err(ClientError::invalid_request(
                "temperature must be in the inclusive range 0.0..=2.0",
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
    pub total_tokens: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub model: String,
    pub text: String,
    pub usage: TokenUsage,
}
