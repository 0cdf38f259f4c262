//! Metrics definitions for the Catalog Service.
//!
//! All metrics follow Prometheus naming conventions:
//! - `catalog_` prefix
//! - `_total` suffix for counters
//! - `_seconds` suffix for duration histograms
//!
//! # Cardinality
//!
//! Labels are bounded to prevent cardinality explosion:
//! - `pattern`: bounded by the routing table (unknown patterns become `unknown`)
//! - `status`: 2 values (success, error)
//! - `error_type`: bounded by `CatalogError` variants
//! - `operation`: bounded by code (`kinships.find_all`, `modules.find_documents`, ...)

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use std::time::Duration;

/// Prometheus builder with the service's histogram buckets.
fn prometheus_builder() -> Result<PrometheusBuilder, String> {
    PrometheusBuilder::new()
        // Bus request buckets: lookups are expected well under 100ms
        .set_buckets_for_metric(
            Matcher::Prefix("catalog_bus_request".to_string()),
            &[
                0.002, 0.005, 0.010, 0.025, 0.050, 0.100, 0.250, 0.500, 1.000, 2.500,
            ],
        )
        .map_err(|e| format!("Failed to set bus request buckets: {e}"))?
        .set_buckets_for_metric(
            Matcher::Prefix("catalog_db_query".to_string()),
            &[
                0.001, 0.002, 0.005, 0.010, 0.020, 0.050, 0.100, 0.250, 0.500, 1.000,
            ],
        )
        .map_err(|e| format!("Failed to set DB query buckets: {e}"))
}

/// Initialize Prometheus metrics recorder and return the handle
/// for serving metrics via HTTP.
///
/// Must be called before any metrics are recorded.
///
/// # Errors
///
/// Returns error if Prometheus recorder fails to install (e.g., already installed).
pub fn init_metrics_recorder() -> Result<PrometheusHandle, String> {
    prometheus_builder()?
        .install_recorder()
        .map_err(|e| format!("Failed to install Prometheus recorder: {e}"))
}

// ============================================================================
// Bus Request Metrics
// ============================================================================

/// Record a handled bus request.
///
/// Metric: `catalog_bus_requests_total`, `catalog_bus_request_duration_seconds`
/// Labels: `pattern`, `status`, `error_type`
pub fn record_bus_request(
    pattern: &str,
    status: &str,
    error_type: Option<&str>,
    duration: Duration,
) {
    histogram!("catalog_bus_request_duration_seconds",
        "pattern" => pattern.to_string()
    )
    .record(duration.as_secs_f64());

    counter!("catalog_bus_requests_total",
        "pattern" => pattern.to_string(),
        "status" => status.to_string(),
        "error_type" => error_type.unwrap_or("none").to_string()
    )
    .increment(1);
}

// ============================================================================
// Database Metrics
// ============================================================================

/// Record database query execution
///
/// Metric: `catalog_db_query_duration_seconds`, `catalog_db_queries_total`
/// Labels: `operation`, `status`
pub fn record_db_query(operation: &str, status: &str, duration: Duration) {
    histogram!("catalog_db_query_duration_seconds",
        "operation" => operation.to_string()
    )
    .record(duration.as_secs_f64());

    counter!("catalog_db_queries_total",
        "operation" => operation.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}
