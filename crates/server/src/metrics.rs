//! Prometheus wiring for search metrics.

use std::sync::Arc;
use std::time::Duration;

use matcher::{set_search_metrics, SearchMetrics};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use pricing::InsuranceSelection;

/// Forwards search observations to the global `metrics` recorder.
#[derive(Debug, Default)]
pub struct PrometheusSearchMetrics;

impl SearchMetrics for PrometheusSearchMetrics {
    fn record_search(
        &self,
        insurance: InsuranceSelection,
        matched_code: Option<&str>,
        latency: Duration,
        result_count: usize,
    ) {
        let matched = if matched_code.is_some() { "true" } else { "false" };
        ::metrics::counter!(
            "carecost_searches_total",
            "insurance" => insurance.as_str(),
            "matched" => matched
        )
        .increment(1);
        ::metrics::histogram!("carecost_search_latency_seconds").record(latency.as_secs_f64());
        ::metrics::histogram!("carecost_search_results").record(result_count as f64);
    }
}

/// Install the Prometheus recorder and route search metrics into it.
pub fn install_prometheus() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    set_search_metrics(Some(Arc::new(PrometheusSearchMetrics)));
    Ok(handle)
}
