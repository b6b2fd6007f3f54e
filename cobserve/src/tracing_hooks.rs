//! Tracing-based observability hooks for client calls and session phases.
//!
//! ```rust
//! use cobserve::TracingObservabilityHooks;
//! use csession::SessionHooks;
//!
//! fn accepts_session_hooks(_hooks: &dyn SessionHooks) {}
//!
//! let hooks = TracingObservabilityHooks;
//! accepts_session_hooks(&hooks);
//! ```

use std::time::Duration;

use cprovider::{ClientError, ClientOperationHooks};
use csession::{SessionError, SessionHooks, SessionPhase, SubmissionId};

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObservabilityHooks;

impl ClientOperationHooks for TracingObservabilityHooks {
    fn on_request_start(&self, operation: &str, model: &str) {
        tracing::info!(
            phase = "client",
            event = "request_start",
            operation,
            model
        );
    }

    fn on_success(&self, operation: &str, model: &str, elapsed: Duration) {
        tracing::info!(
            phase = "client",
            event = "success",
            operation,
            model,
            elapsed_ms = elapsed.as_millis() as u64
        );
    }

    fn on_failure(&self, operation: &str, model: &str, error: &ClientError, elapsed: Duration) {
        tracing::error!(
            phase = "client",
            event = "failure",
            operation,
            model,
            elapsed_ms = elapsed.as_millis() as u64,
            error_kind = ?error.kind,
            retryable = error.retryable,
            error = %error
        );
    }
}

impl SessionHooks for TracingObservabilityHooks {
    fn on_phase_start(&self, phase: SessionPhase, id: SubmissionId) {
        tracing::info!(
            phase = "session",
            event = "phase_start",
            session_phase = %phase,
            submission_id = %id
        );
    }

    fn on_phase_success(&self, phase: SessionPhase, id: SubmissionId, elapsed: Duration) {
        tracing::info!(
            phase = "session",
            event = "phase_success",
            session_phase = %phase,
            submission_id = %id,
            elapsed_ms = elapsed.as_millis() as u64
        );
    }

    fn on_phase_failure(
        &self,
        phase: SessionPhase,
        id: SubmissionId,
        error: &SessionError,
        elapsed: Duration,
    ) {
        tracing::error!(
            phase = "session",
            event = "phase_failure",
            session_phase = %phase,
            submission_id = %id,
            elapsed_ms = elapsed.as_millis() as u64,
            error_kind = ?error.kind,
            error = %error
        );
    }
}
