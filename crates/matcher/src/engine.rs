use std::sync::Arc;
use std::time::Instant;

use catalog::{Catalog, Procedure};
use pricing::resolve_price;

use crate::distance::{DistanceClassifier, ZipPrefixClassifier};
use crate::metrics::metrics_recorder;
use crate::procedure::match_procedure;
use crate::rank::{rank, sort_results};
use crate::types::{HospitalResult, SearchError, SearchParams, SortKey};


/// Search engine over a shared, read-only catalog.
///
/// Holds no mutable state: any number of searches may run concurrently
/// against the same engine.
pub struct SearchEngine<C = ZipPrefixClassifier> {
    catalog: Arc<Catalog>,
    classifier: C,
}

/// Engine using the ZIP-prefix distance heuristic.
pub type DefaultSearchEngine = SearchEngine<ZipPrefixClassifier>;

impl DefaultSearchEngine {
    /// Construct an engine that owns `catalog`.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_catalog_arc(Arc::new(catalog))
    }

    /// Construct an engine from a shared catalog handle.
    pub fn with_catalog_arc(catalog: Arc<Catalog>) -> Self {
        Self::with_classifier(catalog, ZipPrefixClassifier)
    }
}

impl<C: DistanceClassifier> SearchEngine<C> {
    /// Construct an engine with a custom distance classifier.
    pub fn with_classifier(catalog: Arc<Catalog>, classifier: C) -> Self {
        Self {
            catalog,
            classifier,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn catalog_arc(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    /// Resolve free text or a code to a catalog procedure (first match).
    pub fn match_procedure(&self, query: &str) -> Option<&Arc<Procedure>> {
        match_procedure(self.catalog.procedures(), query)
    }

    /// Run a search and return results ordered by ascending display price.
    ///
    /// An unmatched procedure yields an empty list. Hospitals with no price
    /// for the matched procedure are skipped.
    pub fn search(&self, params: &SearchParams) -> Result<Vec<HospitalResult>, SearchError> {
        params.validate()?;

        let start = Instant::now();
        let matched = self.match_procedure(&params.procedure).cloned();
        let results = match &matched {
            Some(procedure) => self.collect_results(procedure, params),
            None => {
                tracing::debug!(query = %params.procedure, "no procedure matched");
                Vec::new()
            }
        };
        let latency = start.elapsed();

        if let Some(procedure) = &matched {
            tracing::debug!(
                cpt_code = %procedure.cpt_code,
                insurance = %params.insurance,
                results = results.len(),
                "search complete"
            );
        }
        if let Some(recorder) = metrics_recorder() {
            recorder.record_search(
                params.insurance,
                matched.as_ref().map(|p| p.cpt_code.as_str()),
                latency,
                results.len(),
            );
        }

        Ok(results)
    }

    /// [`SearchEngine::search`], then reordered by `key`.
    pub fn search_sorted(
        &self,
        params: &SearchParams,
        key: SortKey,
    ) -> Result<Vec<HospitalResult>, SearchError> {
        let results = self.search(params)?;
        if key == SortKey::Price {
            return Ok(results);
        }
        Ok(rank(&results, key))
    }

    fn collect_results(
        &self,
        procedure: &Arc<Procedure>,
        params: &SearchParams,
    ) -> Vec<HospitalResult> {
        let plan = params.plan.as_deref();
        let mut results: Vec<HospitalResult> = self
            .catalog
            .hospitals()
            .iter()
            .filter_map(|hospital| {
                let price = hospital.price_for(&procedure.cpt_code)?;
                Some(HospitalResult {
                    hospital: Arc::clone(hospital),
                    price_info: resolve_price(price, params.insurance, plan),
                    distance: self.classifier.classify(&params.zip_code, &hospital.zip),
                    procedure: Arc::clone(procedure),
                })
            })
            .collect();
        sort_results(&mut results, SortKey::Price);
        results
    }
}
