use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Duration;

use cprovider::{ClientError, ClientOperationHooks};
use csession::{SessionError, SessionHooks, SessionPhase, SubmissionId};

/// Wraps client hooks so a panicking observer cannot poison the call path.
pub struct SafeClientHooks<H> {
    inner: H,
}

impl<H> SafeClientHooks<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H> ClientOperationHooks for SafeClientHooks<H>
where
    H: ClientOperationHooks,
{
    fn on_request_start(&self, operation: &str, model: &str) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_request_start(operation, model)
        }));
    }

    fn on_success(&self, operation: &str, model: &str, elapsed: Duration) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_success(operation, model, elapsed)
        }));
    }

    fn on_failure(&self, operation: &str, model: &str, error: &ClientError, elapsed: Duration) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_failure(operation, model, error, elapsed)
        }));
    }
}

/// Wraps session hooks so a panicking observer cannot poison a phase.
pub struct SafeSessionHooks<H> {
    inner: H,
}

impl<H> SafeSessionHooks<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H> SessionHooks for SafeSessionHooks<H>
where
    H: SessionHooks,
{
    fn on_phase_start(&self, phase: SessionPhase, id: SubmissionId) {
        let _ = catch_unwind(AssertUnwindSafe(|| self.inner.on_phase_start(phase, id)));
    }

    fn on_phase_success(&self, phase: SessionPhase, id: SubmissionId, elapsed: Duration) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_phase_success(phase, id, elapsed)
        }));
    }

    fn on_phase_failure(
        &self,
        phase: SessionPhase,
        id: SubmissionId,
        error: &SessionError,
        elapsed: Duration,
    ) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_phase_failure(phase, id, error, elapsed)
        }));
    }
}
