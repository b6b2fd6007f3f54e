//! In-memory storage for the process-wide model API key.

use std::sync::{Mutex, MutexGuard};

use crate::ClientError;

#[derive(PartialEq, Eq)]
pub struct SecretString {
    value: String,
}

impl SecretString {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn expose(&self) -> &str {
        self.value.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl std::fmt::Debug for SecretString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl Drop for SecretString {
    fn drop(&mut self) {
        unsafe {
            self.value.as_mut_vec().fill(0);
        }
    }
}

/// Holds the single API key; read-only after initialization apart from an
/// explicit rotation through [`CredentialStore::set_api_key`].
#[derive(Debug, Default)]
pub struct CredentialStore {
    api_key: Mutex<Option<SecretString>>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_api_key(&self, api_key: impl Into<String>) -> Result<(), ClientError> {
        let api_key = SecretString::new(api_key);
        if api_key.is_empty() {
            return Err(ClientError::authentication("api key must not be empty"));
        }

        *self.guard()? = Some(api_key);
        Ok(())
    }

    pub fn has_credentials(&self) -> Result<bool, ClientError> {
        Ok(self.guard()?.is_some())
    }

    pub fn with_api_key<R>(&self, f: impl FnOnce(&str) -> R) -> Result<Option<R>, ClientError> {
        Ok(self.guard()?.as_ref().map(|secret| f(secret.expose())))
    }

    pub fn clear(&self) -> Result<bool, ClientError> {
        Ok(self.guard()?.take().is_some())
    }

    fn guard(&self) -> Result<MutexGuard<'_, Option<SecretString>>, ClientError> {
        self.api_key
            .lock()
            .map_err(|_| ClientError::other("credential store lock poisoned"))
    }
}

/// Resolves the configured key or fails with the persistent missing-credential
/// error every AI operation surfaces until a key is provided.
pub fn resolve_api_key(store: &CredentialStore) -> Result<String, ClientError> {
    store.with_api_key(|key| key.to_string())?.ok_or_else(|| {
        ClientError::not_initialized(
            "no API key is configured; AI requests are unavailable until one is provided",
        )
    })
}
