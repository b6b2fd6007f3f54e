use std::time::Duration;

use cprovider::{ClientError, ClientOperationHooks};
use csession::{SessionHooks, SessionPhase, SubmissionId};

use crate::{MetricsObservabilityHooks, SafeClientHooks, SafeSessionHooks, TracingObservabilityHooks};

struct PanickingHooks;

impl ClientOperationHooks for PanickingHooks {
    fn on_request_start(&self, _operation: &str, _model: &str) {
        panic!("observer bug");
    }
}

impl SessionHooks for PanickingHooks {
    fn on_phase_start(&self, _phase: SessionPhase, _id: SubmissionId) {
        panic!("observer bug");
    }
}

#[test]
fn observability_hooks_are_usable_as_trait_objects() {
    let tracing_hooks: &dyn ClientOperationHooks = &TracingObservabilityHooks;
    let metrics_hooks: &dyn SessionHooks = &MetricsObservabilityHooks;

    tracing_hooks.on_request_start("example", "gemini-2.5-flash");
    tracing_hooks.on_failure(
        "example",
        "gemini-2.5-flash",
        &ClientError::timeout("upstream timed out"),
        Duration::from_millis(120),
    );
    metrics_hooks.on_phase_start(SessionPhase::Submitting, SubmissionId(1));
    metrics_hooks.on_phase_success(
        SessionPhase::Submitting,
        SubmissionId(1),
        Duration::from_millis(40),
    );
}

#[test]
fn safe_wrappers_swallow_observer_panics() {
    let client_hooks = SafeClientHooks::new(PanickingHooks);
    client_hooks.on_request_start("example", "gemini-2.5-flash");

    let session_hooks = SafeSessionHooks::new(PanickingHooks);
    session_hooks.on_phase_start(SessionPhase::Ready, SubmissionId(7));
}
