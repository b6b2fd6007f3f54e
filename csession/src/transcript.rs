//! Follow-up transcript contracts and a basic in-memory implementation.

use std::collections::HashMap;
use std::sync::Mutex;

use ccommon::{BoxFuture, ChatMessage};

use crate::{SessionError, SubmissionId};

/// Append-only follow-up history, keyed by submission and retained only for
/// the lifetime of that submission's session.
pub trait TranscriptStore: Send + Sync {
    fn load<'a>(
        &'a self,
        id: SubmissionId,
    ) -> BoxFuture<'a, Result<Vec<ChatMessage>, SessionError>>;

    fn append<'a>(
        &'a self,
        id: SubmissionId,
        messages: Vec<ChatMessage>,
    ) -> BoxFuture<'a, Result<(), SessionError>>;

    fn clear<'a>(&'a self, id: SubmissionId) -> BoxFuture<'a, Result<(), SessionError>>;
}

#[derive(Debug, Default)]
pub struct InMemoryTranscriptStore {
    transcripts: Mutex<HashMap<SubmissionId, Vec<ChatMessage>>>,
}

impl InMemoryTranscriptStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<SubmissionId, Vec<ChatMessage>>>, SessionError>
    {
        self.transcripts
            .lock()
            .map_err(|_| SessionError::store("transcript store lock poisoned"))
    }
}

impl TranscriptStore for InMemoryTranscriptStore {
    fn load<'a>(
        &'a self,
        id: SubmissionId,
    ) -> BoxFuture<'a, Result<Vec<ChatMessage>, SessionError>> {
        Box::pin(async move { Ok(self.guard()?.get(&id).cloned().unwrap_or_default()) })
    }

    fn append<'a>(
        &'a self,
        id: SubmissionId,
        messages: Vec<ChatMessage>,
    ) -> BoxFuture<'a, Result<(), SessionError>> {
        Box::pin(async move {
            self.guard()?.entry(id).or_default().extend(messages);
            Ok(())
        })
    }

    fn clear<'a>(&'a self, id: SubmissionId) -> BoxFuture<'a, Result<(), SessionError>> {
        Box::pin(async move {
            self.guard()?.remove(&id);
            Ok(())
        })
    }
}
