//! Analytics Sinks
//!
//! Delivery is fire-and-forget: a sink never reports failure to the flow
//! that emitted the event.

use crate::domain::events::SubmitEvent;

/// Destination of submission events
pub trait AnalyticsSink: Send + Sync {
    fn track(&self, event: &SubmitEvent);
}

/// Sink writing events as JSON to the `analytics` tracing target
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl AnalyticsSink for TracingSink {
    fn track(&self, event: &SubmitEvent) {
        match serde_json::to_string(event) {
            Ok(payload) => tracing::info!(target: "analytics", %payload, "Submit event"),
            Err(e) => tracing::warn!(target: "analytics", error = %e, "Failed to encode submit event"),
        }
    }
}
