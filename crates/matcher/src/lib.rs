//! # CareCost Search (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` answers price searches over a [`catalog::Catalog`]. It resolves
//! free text or a CPT code to one procedure, prices that procedure at every
//! hospital that publishes it (via the `pricing` crate), buckets each hospital
//! by distance from the caller and orders the results.
//!
//! ## Core Types
//!
//! - [`SearchParams`]: procedure query, 5-digit ZIP, insurance selection and
//!   optional plan.
//! - [`HospitalResult`]: hospital, resolved [`pricing::PriceInfo`], distance
//!   tier and the matched procedure.
//! - [`SortKey`]: `price` (default), `distance` or `rating`.
//! - [`DistanceClassifier`]: seam for distance estimation;
//!   [`ZipPrefixClassifier`] is the built-in ZIP-prefix heuristic.
//! - [`SearchEngine`]: the orchestrator. Holds an `Arc<Catalog>` and a
//!   classifier and is safe to share across threads.
//!
//! ## Example Usage
//!
//! ```
//! use catalog::Catalog;
//! use matcher::{DefaultSearchEngine, SearchParams, SortKey};
//! use pricing::{InsuranceProvider, PriceInfo};
//!
//! let engine = DefaultSearchEngine::new(Catalog::bundled().unwrap());
//! let params = SearchParams::new("72148", "10016")
//!     .with_insurance(InsuranceProvider::Aetna.into())
//!     .with_plan("PPO");
//!
//! let results = engine.search(&params).unwrap();
//! assert!(!results.is_empty());
//! assert!(results
//!     .iter()
//!     .any(|r| matches!(r.price_info, PriceInfo::PlanRange { .. })));
//!
//! let by_rating = engine.search_sorted(&params, SortKey::Rating).unwrap();
//! assert_eq!(by_rating.len(), results.len());
//! ```
//!
//! ## Semantics
//!
//! - Matching is first-match in catalog load order, not best-match.
//! - A query matching no procedure yields `Ok(vec![])`.
//! - [`SearchParams::validate`] runs before matching; blank procedures and
//!   malformed ZIPs return [`SearchError::InvalidQuery`].
//! - Every sort is stable, so ties keep their previous order.
//!
//! ## Metrics
//!
//! Install a [`SearchMetrics`] implementation with [`set_search_metrics`] to
//! observe latency and result counts for every validated search.

mod distance;
mod engine;
mod metrics;
mod procedure;
mod rank;
mod types;

pub use distance::{is_valid_zip, DistanceClassifier, DistanceTier, ZipPrefixClassifier};
pub use engine::{DefaultSearchEngine, SearchEngine};
pub use metrics::{set_search_metrics, SearchMetrics};
pub use procedure::{match_procedure, matches_query};
pub use rank::{by_distance, by_price, by_rating, comparator, rank, sort_results};
pub use types::{HospitalResult, SearchError, SearchParams, SortKey};
