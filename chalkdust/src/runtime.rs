//! Runtime wiring helpers for tutoring sessions and preferences.

use std::sync::Arc;

use cobserve::TracingObservabilityHooks;
use cprefs::{InMemoryPreferenceStore, Preferences};

use crate::{CompletionClient, PreferenceStore, TutorService};

/// Everything a presentation layer needs from this library: the session
/// service and the persisted display preferences.
pub struct TutorBundle {
    pub tutor: TutorService,
    pub preferences: Preferences,
}

pub fn in_memory_preference_store() -> Arc<dyn PreferenceStore> {
    Arc::new(InMemoryPreferenceStore::new())
}

pub fn tutor_service(client: Arc<dyn CompletionClient>) -> TutorService {
    TutorService::builder(client).build()
}

/// Session service with tracing hooks on both the client and phase paths.
pub fn tutor_service_observed(client: Arc<dyn CompletionClient>) -> TutorService {
    TutorService::builder(client)
        .client_hooks(Arc::new(TracingObservabilityHooks))
        .session_hooks(Arc::new(TracingObservabilityHooks))
        .build()
}

pub fn build_runtime(client: Arc<dyn CompletionClient>) -> TutorBundle {
    build_runtime_with(client, in_memory_preference_store())
}

pub fn build_runtime_with(
    client: Arc<dyn CompletionClient>,
    preference_store: Arc<dyn PreferenceStore>,
) -> TutorBundle {
    TutorBundle {
        tutor: tutor_service_observed(client),
        preferences: Preferences::new(preference_store),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ccommon::Language;
    use cprovider::{
        ClientError, ClientFuture, Completion, CompletionClient, CompletionRequest, TokenUsage,
    };

    use super::build_runtime;

    #[derive(Debug)]
    struct FakeClient;

    impl CompletionClient for FakeClient {
        fn generate<'a>(
            &'a self,
            request: CompletionRequest,
        ) -> ClientFuture<'a, Result<Completion, ClientError>> {
            Box::pin(async move {
                let text = if request.prompt.contains("\"exampleCode\"") {
                    r#"{"exampleCode":"print(1)","exampleCodeOutput":"1"}"#
                } else if request.prompt.contains("\"practiceQuestion\"") {
                    r#"{"practiceQuestion":"Print two.","instructions":"1. Call print."}"#
                } else {
                    "An explanation of printing."
                };

                Ok(Completion {
                    model: request.model,
                    text: text.to_string(),
                    usage: TokenUsage::default(),
                })
            })
        }
    }

    #[tokio::test]
    async fn build_runtime_wires_a_working_tutor_and_preferences() {
        let runtime = build_runtime(Arc::new(FakeClient));

        let result = runtime
            .tutor
            .submit("print(1)", Language::Python)
            .await
            .expect("submission should succeed");
        assert_eq!(result.example_code_output, "1");

        let preferences = runtime.preferences.load_or_default().await;
        runtime
            .preferences
            .save(&preferences)
            .await
            .expect("preferences should save");
    }
}
