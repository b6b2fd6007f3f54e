//! Typed completion client over the hosted model API.
//!
//! ```rust
//! use cprovider::{ClientErrorKind, CredentialStore, resolve_api_key};
//!
//! let store = CredentialStore::new();
//! let err = resolve_api_key(&store).expect_err("missing key should fail");
//! assert_eq!(err.kind, ClientErrorKind::NotInitialized);
//!
//! store.set_api_key("k-123").expect("key should store");
//! assert_eq!(resolve_api_key(&store).expect("key resolves"), "k-123");
//! ```

mod client;
mod credentials;
mod error;
mod hooks;
mod model;

pub mod gemini;

pub use client::{ClientFuture, CompletionClient};
pub use credentials::{CredentialStore, SecretString, resolve_api_key};
pub use error::{ClientError, ClientErrorKind};
pub use gemini::{DEFAULT_MODEL, GeminiClient, GeminiHttpTransport, GeminiTransport};
pub use hooks::{ClientOperationHooks, NoopClientHooks, execute_observed};
pub use model::{Completion, CompletionRequest, TokenUsage};

#[cfg(test)]
mod tests {
    use ccommon::GenerationOptions;

    use super::*;

    #[test]
    fn completion_request_validate_enforces_contract() {
        let empty_model = CompletionRequest::new("  ", "hi");
        let err = empty_model.validate().expect_err("empty model must fail");
        assert_eq!(err.kind, ClientErrorKind::InvalidRequest);

        let blank_prompt = CompletionRequest::new("gemini-2.5-flash", " \n ");
        let err = blank_prompt.validate().expect_err("blank prompt must fail");
        assert_eq!(err.kind, ClientErrorKind::InvalidRequest);

        let bad_temperature = CompletionRequest::new("gemini-2.5-flash", "hi")
            .with_options(GenerationOptions::default().with_temperature(2.5));
        let err = bad_temperature
            .validate()
            .expect_err("temperature outside range must fail");
        assert_eq!(err.kind, ClientErrorKind::InvalidRequest);

        let zero_tokens = CompletionRequest::new("gemini-2.5-flash", "hi")
            .with_options(GenerationOptions::default().with_max_output_tokens(0));
        let err = zero_tokens.validate().expect_err("zero max tokens must fail");
        assert_eq!(err.kind, ClientErrorKind::InvalidRequest);

        let valid = CompletionRequest::new("gemini-2.5-flash", "hi")
            .with_options(GenerationOptions::default().with_temperature(0.4).expect_json());
        assert!(valid.validate().is_ok());
    }

    #[test]
    fn error_helper_builders_assign_expected_retryability() {
        assert!(!ClientError::not_initialized("no key").retryable);
        assert!(!ClientError::authentication("bad key").retryable);
        assert!(ClientError::quota_exceeded("slow down").retryable);
        assert!(ClientError::timeout("timed out").retryable);
        assert!(ClientError::transport("connection reset").retryable);
        assert!(!ClientError::invalid_request("bad input").retryable);
    }

    #[test]
    fn refinement_upgrades_known_auth_and_quota_signatures() {
        let auth = ClientError::invalid_request("API key not valid. Please pass a valid API key.")
            .refine();
        assert_eq!(auth.kind, ClientErrorKind::Authentication);
        assert!(auth.message.contains("update it in settings"));

        let quota = ClientError::transport("RESOURCE_EXHAUSTED: Resource has been exhausted.")
            .refine();
        assert_eq!(quota.kind, ClientErrorKind::QuotaExceeded);
        assert!(quota.message.contains("wait a moment"));

        let untouched = ClientError::transport("connection reset by peer").refine();
        assert_eq!(untouched.kind, ClientErrorKind::Transport);
        assert_eq!(untouched.message, "connection reset by peer");
    }

    #[test]
    fn credential_store_round_trips_and_redacts() {
        let store = CredentialStore::new();
        assert!(!store.has_credentials().expect("store readable"));

        let err = store.set_api_key("").expect_err("empty key must fail");
        assert_eq!(err.kind, ClientErrorKind::Authentication);

        store.set_api_key("k-123").expect("key should store");
        assert!(store.has_credentials().expect("store readable"));

        let secret = SecretString::new("k-123");
        assert_eq!(format!("{secret:?}"), "[REDACTED]");

        assert!(store.clear().expect("store writable"));
        assert!(!store.has_credentials().expect("store readable"));
    }
}
