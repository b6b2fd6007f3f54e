//! Unified facade over the chalkdust workspace crates.
//!
//! This crate is designed to be the single dependency for most applications.
//! It re-exports the core chalkdust crates and provides convenience helpers
//! for client construction and runtime wiring.

pub mod prelude;
pub mod providers;
pub mod runtime;
pub mod util;

pub use ccommon;
pub use cobserve;
pub use cparse;
pub use cprefs;
pub use cprompt;
pub use cprovider;
pub use csession;

pub use ccommon::{
    BoxFuture, ChatMessage, ChatRole, Difficulty, GenerationOptions, Language, RequestKind,
    SourceKind,
};
pub use cobserve::{
    MetricsObservabilityHooks, SafeClientHooks, SafeSessionHooks, TracingObservabilityHooks,
};
pub use cparse::{
    AnalysisResult, ExamplePayload, ParseError, ParseErrorKind, PracticePayload, ResponsePayload,
    SolutionReview, parse_payload, require_text, strip_code_fence,
};
pub use cprefs::{
    DisplayPreferences, InMemoryPreferenceStore, PreferenceStore, PreferenceStoreConfig,
    Preferences, PrefsError, PrefsErrorKind, SqlitePreferenceStore, Theme,
    create_preference_store,
};
pub use cprompt::{PromptError, PromptErrorKind, PromptSpec, classify_source};
pub use cprovider::{
    ClientError, ClientErrorKind, ClientFuture, ClientOperationHooks, Completion,
    CompletionClient, CompletionRequest, CredentialStore, DEFAULT_MODEL, GeminiClient,
    GeminiHttpTransport, GeminiTransport, NoopClientHooks, SecretString, TokenUsage,
    execute_observed, resolve_api_key,
};
pub use csession::{
    InMemoryTranscriptStore, NoopSessionHooks, SessionError, SessionErrorKind, SessionHooks,
    SessionPhase, SessionSnapshot, SubmissionId, TranscriptStore, TutorService,
    TutorServiceBuilder,
};

pub use providers::{ClientBuildConfig, build_client_from_api_key, build_client_with_config};
pub use runtime::{
    TutorBundle, build_runtime, build_runtime_with, in_memory_preference_store, tutor_service,
    tutor_service_observed,
};
pub use util::{
    assistant_message, language_from_filename, parse_difficulty, parse_language, user_message,
};

#[cfg(test)]
mod tests {
    use crate::{ClientBuildConfig, ClientErrorKind, Language, parse_language};

    #[test]
    fn empty_api_keys_are_rejected_at_construction() {
        let error = crate::build_client_from_api_key("   ")
            .err()
            .expect("empty key must fail");
        assert_eq!(error.kind, ClientErrorKind::Authentication);
    }

    #[test]
    fn client_build_config_defaults_are_sensible() {
        let config = ClientBuildConfig::new("k-123").with_model("gemini-2.5-pro");
        assert_eq!(config.model, "gemini-2.5-pro");
        assert_eq!(config.timeout.as_secs(), 90);
        assert!(config.base_url.is_none());
    }

    #[test]
    fn facade_re_exports_resolve() {
        assert_eq!(parse_language("rust"), Language::Rust);
    }
}
