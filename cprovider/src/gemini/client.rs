//! Gemini completion client over transport and credential store.

use std::sync::Arc;

use crate::{
    ClientError, ClientFuture, Completion, CompletionClient, CompletionRequest, CredentialStore,
    resolve_api_key,
};

use super::transport::GeminiTransport;

/// Default model used when a request leaves the model field empty.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

#[derive(Clone)]
pub struct GeminiClient {
    credentials: Arc<CredentialStore>,
    transport: Arc<dyn GeminiTransport>,
    fallback_model: String,
}

impl GeminiClient {
    pub fn new(credentials: Arc<CredentialStore>, transport: Arc<dyn GeminiTransport>) -> Self {
        Self {
            credentials,
            transport,
            fallback_model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_fallback_model(mut self, model: impl Into<String>) -> Self {
        self.fallback_model = model.into();
        self
    }
}

impl CompletionClient for GeminiClient {
    fn generate<'a>(
        &'a self,
        mut request: CompletionRequest,
    ) -> ClientFuture<'a, Result<Completion, ClientError>> {
        Box::pin(async move {
            if request.model.trim().is_empty() {
                request.model = self.fallback_model.clone();
            }

            request.validate()?;
            let api_key = resolve_api_key(&self.credentials)?;
            self.transport.generate(request, api_key).await
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use crate::{ClientErrorKind, TokenUsage};

    use super::*;

    #[derive(Debug, Default)]
    struct FakeTransport {
        requests: Mutex<Vec<(CompletionRequest, String)>>,
    }

    impl GeminiTransport for FakeTransport {
        fn generate<'a>(
            &'a self,
            request: CompletionRequest,
            api_key: String,
        ) -> ClientFuture<'a, Result<Completion, ClientError>> {
            Box::pin(async move {
                let model = request.model.clone();
                self.requests
                    .lock()
                    .expect("requests lock")
                    .push((request, api_key));

                Ok(Completion {
                    model,
                    text: "generated".to_string(),
                    usage: TokenUsage::default(),
                })
            })
        }
    }

    #[tokio::test]
    async fn missing_credentials_fail_before_the_transport_is_touched() {
        let transport = Arc::new(FakeTransport::default());
        let client = GeminiClient::new(Arc::new(CredentialStore::new()), transport.clone());

        let error = client
            .generate(CompletionRequest::new(DEFAULT_MODEL, "hello"))
            .await
            .expect_err("missing key must fail");

        assert_eq!(error.kind, ClientErrorKind::NotInitialized);
        assert!(transport.requests.lock().expect("requests lock").is_empty());
    }

    #[tokio::test]
    async fn configured_key_reaches_the_transport_with_the_request() {
        let credentials = Arc::new(CredentialStore::new());
        credentials.set_api_key("k-123").expect("key should store");

        let transport = Arc::new(FakeTransport::default());
        let client = GeminiClient::new(credentials, transport.clone());

        let completion = client
            .generate(CompletionRequest::new("", "hello"))
            .await
            .expect("call should succeed");

        assert_eq!(completion.text, "generated");
        assert_eq!(completion.model, DEFAULT_MODEL);

        let requests = transport.requests.lock().expect("requests lock");
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0.model, DEFAULT_MODEL);
        assert_eq!(requests[0].1, "k-123");
    }

    #[tokio::test]
    async fn invalid_requests_are_rejected_locally() {
        let credentials = Arc::new(CredentialStore::new());
        credentials.set_api_key("k-123").expect("key should store");

        let transport = Arc::new(FakeTransport::default());
        let client = GeminiClient::new(credentials, transport.clone());

        let error = client
            .generate(CompletionRequest::new(DEFAULT_MODEL, "   "))
            .await
            .expect_err("blank prompt must fail");

        assert_eq!(error.kind, ClientErrorKind::InvalidRequest);
        assert!(transport.requests.lock().expect("requests lock").is_empty());
    }
}
