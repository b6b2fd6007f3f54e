//! Gemini HTTP payload serde models and conversion helpers.

use serde::{Deserialize, Serialize};

use crate::{ClientError, Completion, CompletionRequest, TokenUsage};

pub(crate) fn build_api_request(request: &CompletionRequest) -> GeminiApiRequest {
    let generation_config = GeminiApiGenerationConfig {
        temperature: request.options.temperature,
        max_output_tokens: request.options.max_output_tokens,
        response_mime_type: request
            .options
            .json_response
            .then(|| "application/json".to_string()),
    };

    GeminiApiRequest {
        contents: vec![GeminiApiContent {
            parts: vec![GeminiApiPart {
                text: request.prompt.clone(),
            }],
        }],
        generation_config,
    }
}

pub(crate) fn extract_error_message(body: &str) -> Option<String> {
    let parsed = serde_json::from_str::<GeminiApiErrorEnvelope>(body).ok()?;
    let message = match parsed.error.status {
        Some(status) if !status.is_empty() => format!("{status}: {}", parsed.error.message),
        _ => parsed.error.message,
    };

    Some(message)
}

pub(crate) fn into_completion(
    response: GeminiApiResponse,
    model: String,
) -> Result<Completion, ClientError> {
    let candidate = response
        .candidates
        .unwrap_or_default()
        .into_iter()
        .next()
        .ok_or_else(|| ClientError::transport("Gemini response did not include candidates"))?;

    let text = candidate
        .content
        .and_then(|content| content.parts)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|part| part.text)
        .collect::<String>();

    let usage = response.usage_metadata.unwrap_or_default();

    Ok(Completion {
        model,
        text,
        usage: TokenUsage {
            input_tokens: usage.prompt_token_count,
            output_tokens: usage.candidates_token_count,
            total_tokens: usage.total_token_count,
        },
    })
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeminiApiErrorEnvelope {
    pub error: GeminiApiError,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeminiApiError {
    pub message: String,
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GeminiApiRequest {
    pub contents: Vec<GeminiApiContent>,
    pub generation_config: GeminiApiGenerationConfig,
}

#[derive(Debug, Serialize)]
pub(crate) struct GeminiApiContent {
    pub parts: Vec<GeminiApiPart>,
}

#[derive(Debug, Serialize)]
pub(crate) struct GeminiApiPart {
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GeminiApiGenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GeminiApiResponse {
    pub candidates: Option<Vec<GeminiApiCandidate>>,
    pub usage_metadata: Option<GeminiApiUsage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeminiApiCandidate {
    pub content: Option<GeminiApiCandidateContent>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeminiApiCandidateContent {
    pub parts: Option<Vec<GeminiApiResponsePart>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeminiApiResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GeminiApiUsage {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
    #[serde(default)]
    pub total_token_count: u32,
}
