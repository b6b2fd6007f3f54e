//! Observability hook implementations for chalkdust client calls and
//! session phases.

mod metrics_hooks;
mod safe_hooks;
mod tracing_hooks;

#[cfg(test)]
mod tests;

pub use metrics_hooks::MetricsObservabilityHooks;
pub use safe_hooks::{SafeClientHooks, SafeSessionHooks};
pub use tracing_hooks::TracingObservabilityHooks;
