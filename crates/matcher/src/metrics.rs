// Metrics hooks for the `matcher` crate.
//
// Callers install a global `SearchMetrics` implementation via
// [`set_search_metrics`]; every `SearchEngine::search` call then reports its
// latency and outcome.
use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;
use pricing::InsuranceSelection;

/// Metrics observer for search operations.
pub trait SearchMetrics: Send + Sync {
    /// Record the outcome of one validated search.
    ///
    /// `matched_code` is the CPT code the query resolved to, or `None` when
    /// nothing matched; `result_count` is the number of hospitals returned.
    fn record_search(
        &self,
        insurance: InsuranceSelection,
        matched_code: Option<&str>,
        latency: Duration,
        result_count: usize,
    );
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn SearchMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn SearchMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn SearchMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global search metrics recorder.
///
/// This is typically called once during service startup so every
/// `SearchEngine` shares the same metrics backend.
pub fn set_search_metrics(recorder: Option<Arc<dyn SearchMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}
