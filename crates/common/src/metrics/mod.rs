//! Metrics and observability utilities
//!
//! Registers metric descriptions for the engine's counters and histograms.
//! Only the `metrics` facade is used here; exporting (Prometheus or
//! otherwise) is the embedding host's concern.

use metrics::{describe_counter, describe_gauge, describe_histogram, Unit};

/// Metrics prefix for all NewsGraph metrics
pub const METRICS_PREFIX: &str = "newsgraph";

/// Total sources registered
pub const SOURCES_REGISTERED: &str = "newsgraph_sources_registered_total";

/// Total citations ingested
pub const CITATIONS_ADDED: &str = "newsgraph_citations_added_total";

/// Citations rejected because an endpoint was unregistered
pub const CITATIONS_REJECTED: &str = "newsgraph_citations_rejected_total";

/// Iterations the authority scorer ran before stopping
pub const AUTHORITY_ITERATIONS: &str = "newsgraph_authority_iterations";

/// Chambers reported by the last detection run
pub const CHAMBERS_DETECTED: &str = "newsgraph_chambers_detected";

/// Register all metric descriptions
pub fn register_metrics() {
    describe_counter!(SOURCES_REGISTERED, Unit::Count, "Total sources registered");

    describe_counter!(CITATIONS_ADDED, Unit::Count, "Total citations ingested");

    describe_counter!(
        CITATIONS_REJECTED,
        Unit::Count,
        "Citations rejected due to unregistered endpoints"
    );

    describe_histogram!(
        AUTHORITY_ITERATIONS,
        Unit::Count,
        "Power iterations per authority scoring run"
    );

    describe_gauge!(
        CHAMBERS_DETECTED,
        Unit::Count,
        "Echo chambers reported by the last detection run"
    );

    tracing::info!("Metrics registered");
}
