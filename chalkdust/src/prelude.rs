//! Common imports for most chalkdust applications.

pub use crate::{
    build_client_from_api_key, build_client_with_config, build_runtime, build_runtime_with,
    in_memory_preference_store, tutor_service, tutor_service_observed, ClientBuildConfig,
    TutorBundle,
};
pub use crate::{
    assistant_message, language_from_filename, parse_difficulty, parse_language, user_message,
};
pub use crate::{
    AnalysisResult, BoxFuture, ChatMessage, ChatRole, ClientError, ClientErrorKind,
    CompletionClient, CompletionRequest, CredentialStore, Difficulty, DisplayPreferences,
    ExamplePayload, GenerationOptions, Language, PreferenceStore, Preferences, RequestKind,
    SessionError, SessionErrorKind, SessionPhase, SessionSnapshot, SolutionReview, SourceKind,
    SubmissionId, Theme, TutorService, TutorServiceBuilder,
};
