//! Metrics-based observability hooks for client calls and session phases.
//!
//! ```rust
//! use cobserve::MetricsObservabilityHooks;
//! use cprovider::ClientOperationHooks;
//!
//! fn accepts_client_hooks(_hooks: &dyn ClientOperationHooks) {}
//!
//! let hooks = MetricsObservabilityHooks;
//! accepts_client_hooks(&hooks);
//! ```

use std::time::Duration;

use cprovider::{ClientError, ClientOperationHooks};
use csession::{SessionError, SessionHooks, SessionPhase, SubmissionId};

#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsObservabilityHooks;

impl ClientOperationHooks for MetricsObservabilityHooks {
    fn on_request_start(&self, operation: &str, model: &str) {
        metrics::counter!(
            "chalkdust_client_request_start_total",
            "operation" => operation.to_string(),
            "model" => model.to_string()
        )
        .increment(1);
    }

    fn on_success(&self, operation: &str, model: &str, elapsed: Duration) {
        metrics::counter!(
            "chalkdust_client_success_total",
            "operation" => operation.to_string(),
            "model" => model.to_string()
        )
        .increment(1);
        metrics::histogram!(
            "chalkdust_client_request_seconds",
            "operation" => operation.to_string(),
            "model" => model.to_string()
        )
        .record(elapsed.as_secs_f64());
    }

    fn on_failure(&self, operation: &str, model: &str, error: &ClientError, elapsed: Duration) {
        metrics::counter!(
            "chalkdust_client_failure_total",
            "operation" => operation.to_string(),
            "model" => model.to_string(),
            "error_kind" => format!("{:?}", error.kind)
        )
        .increment(1);
        metrics::histogram!(
            "chalkdust_client_request_seconds",
            "operation" => operation.to_string(),
            "model" => model.to_string()
        )
        .record(elapsed.as_secs_f64());
    }
}

impl SessionHooks for MetricsObservabilityHooks {
    fn on_phase_start(&self, phase: SessionPhase, _id: SubmissionId) {
        metrics::counter!(
            "chalkdust_session_phase_start_total",
            "phase" => phase.as_str()
        )
        .increment(1);
    }

    fn on_phase_success(&self, phase: SessionPhase, _id: SubmissionId, elapsed: Duration) {
        metrics::counter!(
            "chalkdust_session_phase_success_total",
            "phase" => phase.as_str()
        )
        .increment(1);
        metrics::histogram!(
            "chalkdust_session_phase_seconds",
            "phase" => phase.as_str()
        )
        .record(elapsed.as_secs_f64());
    }

    fn on_phase_failure(
        &self,
        phase: SessionPhase,
        _id: SubmissionId,
        error: &SessionError,
        elapsed: Duration,
    ) {
        metrics::counter!(
            "chalkdust_session_phase_failure_total",
            "phase" => phase.as_str(),
            "error_kind" => format!("{:?}", error.kind)
        )
        .increment(1);
        metrics::histogram!(
            "chalkdust_session_phase_seconds",
            "phase" => phase.as_str()
        )
        .record(elapsed.as_secs_f64());
    }
}
