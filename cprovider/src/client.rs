use std::future::Future;
use std::pin::Pin;

use crate::{ClientError, Completion, CompletionRequest};

pub type ClientFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// One model call per invocation; no retry policy is applied here — callers
/// re-invoke manually when the user retries an action.
pub trait CompletionClient: Send + Sync {
    fn generate<'a>(
        &'a self,
        request: CompletionRequest,
    ) -> ClientFuture<'a, Result<Completion, ClientError>>;
}
