//! Stable client construction surface for facade consumers.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::{
    ClientError, CompletionClient, CredentialStore, DEFAULT_MODEL, GeminiClient,
    GeminiHttpTransport,
};

#[derive(Debug, Clone)]
pub struct ClientBuildConfig {
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
    pub base_url: Option<String>,
}

impl ClientBuildConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(90),
            base_url: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
}

pub fn build_client_from_api_key(
    api_key: impl Into<String>,
) -> Result<Arc<dyn CompletionClient>, ClientError> {
    build_client_with_config(ClientBuildConfig::new(api_key))
}

pub fn build_client_with_config(
    config: ClientBuildConfig,
) -> Result<Arc<dyn CompletionClient>, ClientError> {
    let api_key = config.api_key.trim().to_string();
    if api_key.is_empty() {
        return Err(ClientError::authentication("client API key must not be empty"));
    }

    let credentials = Arc::new(CredentialStore::new());
    credentials.set_api_key(api_key)?;

    let http = Client::builder()
        .timeout(config.timeout)
        .build()
        .map_err(|err| ClientError::transport(err.to_string()))?;

    let mut transport = GeminiHttpTransport::new(http);
    if let Some(base_url) = config.base_url {
        transport = transport.with_base_url(base_url);
    }

    Ok(Arc::new(
        GeminiClient::new(credentials, Arc::new(transport)).with_fallback_model(config.model),
    ))
}
