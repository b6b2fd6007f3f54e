//! Gemini transport trait and reqwest-based HTTP implementation.

use reqwest::{Client, Response, StatusCode};

use crate::{ClientError, ClientFuture, Completion, CompletionRequest};

use super::serde_api::{build_api_request, extract_error_message};

pub trait GeminiTransport: Send + Sync + std::fmt::Debug {
    fn generate<'a>(
        &'a self,
        request: CompletionRequest,
        api_key: String,
    ) -> ClientFuture<'a, Result<Completion, ClientError>>;
}

#[derive(Debug, Clone)]
pub struct GeminiHttpTransport {
    client: Client,
    base_url: String,
}

impl GeminiHttpTransport {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            model
        )
    }

    async fn parse_error(response: Response) -> ClientError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = extract_error_message(&body)
            .unwrap_or_else(|| format!("Gemini request failed with status {status}"));

        let error = match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                ClientError::authentication(message)
            }
            StatusCode::TOO_MANY_REQUESTS => ClientError::quota_exceeded(message),
            StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
                ClientError::timeout(message)
            }
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                ClientError::invalid_request(message)
            }
            StatusCode::SERVICE_UNAVAILABLE | StatusCode::BAD_GATEWAY => {
                ClientError::unavailable(message)
            }
            _ => ClientError::transport(message),
        };

        error.refine()
    }
}

impl GeminiTransport for GeminiHttpTransport {
    fn generate<'a>(
        &'a self,
        request: CompletionRequest,
        api_key: String,
    ) -> ClientFuture<'a, Result<Completion, ClientError>> {
        Box::pin(async move {
            let api_request = build_api_request(&request);
            let url = self.endpoint(&request.model);
            let response = self
                .client
                .post(url)
                .header("x-goog-api-key", api_key)
                .json(&api_request)
                .send()
                .await
                .map_err(|err| {
                    if err.is_timeout() {
                        ClientError::timeout(err.to_string())
                    } else {
                        ClientError::transport(err.to_string())
                    }
                })?;

            if !response.status().is_success() {
                return Err(Self::parse_error(response).await);
            }

            let parsed: super::serde_api::GeminiApiResponse = response
                .json()
                .await
                .map_err(|err| ClientError::transport(err.to_string()))?;

            super::serde_api::into_completion(parsed, request.model)
        })
    }
}
