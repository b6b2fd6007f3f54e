//! Operational hook contracts for observing individual model calls.

use std::future::Future;
use std::time::{Duration, Instant};

use crate::ClientError;

pub trait ClientOperationHooks: Send + Sync {
    fn on_request_start(&self, _operation: &str, _model: &str) {}

    fn on_success(&self, _operation: &str, _model: &str, _elapsed: Duration) {}

    fn on_failure(&self, _operation: &str, _model: &str, _error: &ClientError, _elapsed: Duration) {
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopClientHooks;

impl ClientOperationHooks for NoopClientHooks {}

/// Runs one client call under the hook contract, timing it and reporting
/// the outcome. There is deliberately no retry loop around this.
pub async fn execute_observed<T, Fut>(
    operation: &str,
    model: &str,
    hooks: &dyn ClientOperationHooks,
    future: Fut,
) -> Result<T, ClientError>
where
    Fut: Future<Output = Result<T, ClientError>>,
{
    hooks.on_request_start(operation, model);
    let started = Instant::now();

    match future.await {
        Ok(value) => {
            hooks.on_success(operation, model, started.elapsed());
            Ok(value)
        }
        Err(error) => {
            hooks.on_failure(operation, model, &error, started.elapsed());
            Err(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::{ClientError, ClientErrorKind};

    #[derive(Default)]
    struct RecordingHooks {
        events: Mutex<Vec<String>>,
    }

    impl ClientOperationHooks for RecordingHooks {
        fn on_request_start(&self, operation: &str, model: &str) {
            self.events
                .lock()
                .expect("events lock")
                .push(format!("start:{operation}:{model}"));
        }

        fn on_success(&self, operation: &str, model: &str, _elapsed: Duration) {
            self.events
                .lock()
                .expect("events lock")
                .push(format!("success:{operation}:{model}"));
        }

        fn on_failure(
            &self,
            operation: &str,
            model: &str,
            error: &ClientError,
            _elapsed: Duration,
        ) {
            self.events
                .lock()
                .expect("events lock")
                .push(format!("failure:{operation}:{model}:{:?}", error.kind));
        }
    }

    #[tokio::test]
    async fn execute_observed_reports_success() {
        let hooks = RecordingHooks::default();

        let value = execute_observed("example", "gemini-2.5-flash", &hooks, async { Ok(41) })
            .await
            .expect("call should succeed");

        assert_eq!(value, 41);
        let events = hooks.events.lock().expect("events lock").clone();
        assert_eq!(
            events,
            vec![
                "start:example:gemini-2.5-flash".to_string(),
                "success:example:gemini-2.5-flash".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn execute_observed_reports_failure_without_retrying() {
        let hooks = RecordingHooks::default();

        let error = execute_observed::<(), _>("practice", "gemini-2.5-flash", &hooks, async {
            Err(ClientError::timeout("upstream timed out"))
        })
        .await
        .expect_err("call should fail");

        assert_eq!(error.kind, ClientErrorKind::Timeout);
        let events = hooks.events.lock().expect("events lock").clone();
        assert_eq!(events.len(), 2);
        assert!(events[1].starts_with("failure:practice"));
    }
}
