//! Workspace umbrella crate for CareCost.
//!
//! This crate stitches the catalog, pricing and search crates together so
//! callers can go from a YAML configuration to a ready search engine with a
//! single call, and re-exports the types a caller needs along the way.
//!
//! ```
//! use carecost::{CareCostConfig, SearchParams, SortKey, build_engine};
//!
//! let engine = build_engine(&CareCostConfig::default()).unwrap();
//! let results = engine
//!     .search_sorted(&SearchParams::new("colonoscopy", "10016"), SortKey::Price)
//!     .unwrap();
//! assert!(results.iter().all(|r| r.procedure.cpt_code == "45378"));
//! ```

pub mod config;

pub use catalog::{
    BundledSource, Catalog, CatalogConfig, CatalogError, CatalogIssue, CatalogSource,
    Coordinates, FinancialAssistance, Hospital, InsuranceRates, JsonFileSource, JsonStrSource,
    PlanPriceRange, PlanRates, Procedure, ProcedurePrice, RawCatalog, SourceConfig,
};
pub use config::{
    CareCostConfig, CatalogYamlConfig, ConfigLoadError, LoggingYamlConfig, SearchYamlConfig,
};
pub use matcher::{
    DefaultSearchEngine, DistanceClassifier, DistanceTier, HospitalResult, SearchEngine,
    SearchError, SearchMetrics, SearchParams, SortKey, ZipPrefixClassifier, is_valid_zip,
    match_procedure, rank, set_search_metrics,
};
pub use pricing::{
    InsuranceProvider, InsuranceSelection, PriceBasis, PriceInfo, PriceKind, PricingError,
    format_currency, resolve, resolve_price, resolve_with_basis,
};

use std::sync::Arc;

use thiserror::Error;

/// Errors that can occur while turning configuration into a search engine.
#[derive(Debug, Error)]
pub enum CareCostError {
    #[error("configuration failure: {0}")]
    Config(#[from] ConfigLoadError),
    #[error("catalog failure: {0}")]
    Catalog(#[from] CatalogError),
}

/// Load the catalog described by `config`.
pub fn load_catalog(config: &CareCostConfig) -> Result<Catalog, CareCostError> {
    config.validate()?;
    let catalog = Catalog::load(&config.catalog_config())?;
    Ok(catalog)
}

/// Load the configured catalog and wrap it in a search engine.
pub fn build_engine(config: &CareCostConfig) -> Result<DefaultSearchEngine, CareCostError> {
    let catalog = load_catalog(config)?;
    Ok(DefaultSearchEngine::with_catalog_arc(Arc::new(catalog)))
}

/// Read a YAML file and build a search engine from it.
pub fn build_engine_from_file<P: AsRef<std::path::Path>>(
    path: P,
) -> Result<(CareCostConfig, DefaultSearchEngine), CareCostError> {
    let config = CareCostConfig::from_file(path)?;
    let engine = build_engine(&config)?;
    Ok((config, engine))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_builds_bundled_engine() {
        let engine = build_engine(&CareCostConfig::default()).unwrap();
        assert_eq!(engine.catalog().procedure_count(), 8);
        assert_eq!(engine.catalog().hospital_count(), 5);
    }

    #[test]
    fn invalid_config_is_rejected_before_loading() {
        let config = CareCostConfig {
            version: "9".into(),
            ..CareCostConfig::default()
        };
        assert!(matches!(
            build_engine(&config),
            Err(CareCostError::Config(ConfigLoadError::UnsupportedVersion(_)))
        ));
    }

    #[test]
    fn missing_catalog_files_surface_as_catalog_errors() {
        let mut config = CareCostConfig::default();
        config.catalog.procedures_path = Some("/nonexistent/procedures.json".into());
        config.catalog.hospitals_path = Some("/nonexistent/hospitals.json".into());
        assert!(matches!(
            load_catalog(&config),
            Err(CareCostError::Catalog(CatalogError::Read { .. }))
        ));
    }
}
