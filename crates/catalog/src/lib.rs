//! # CareCost Catalog (`catalog`)
//!
//! Read-only store of the procedures and hospitals that searches run over.
//! The catalog is loaded once at startup and never mutated afterwards, so it
//! can be shared freely between concurrent searches.
//!
//! ## Core Types
//!
//! - [`Procedure`]: a CPT-coded medical procedure.
//! - [`Hospital`]: display attributes plus a `prices` table keyed by CPT code.
//! - [`ProcedurePrice`]: gross charge, cash price and per-provider, per-plan
//!   negotiated [`PlanPriceRange`]s.
//! - [`Catalog`]: the in-memory store. Keeps load order (first-match search
//!   depends on it) and indexes records by code and id.
//! - [`CatalogSource`]: where records come from. [`JsonFileSource`] reads two
//!   JSON files, [`JsonStrSource`] parses in-memory strings and
//!   [`BundledSource`] serves the sample catalog compiled into this crate.
//!
//! ## Example Usage
//!
//! ```
//! use catalog::{Catalog, CatalogConfig, SourceConfig};
//!
//! let cfg = CatalogConfig::new().with_source(SourceConfig::bundled());
//! let catalog = Catalog::load(&cfg).unwrap();
//!
//! let mri = catalog.procedure_by_code("72148").unwrap();
//! assert!(mri.name.contains("MRI"));
//! ```
//!
//! ## Consistency
//!
//! [`Catalog::validate`] reports inverted plan ranges, negative prices,
//! out-of-range ratings and prices for unknown procedures. Loading with
//! `strict` turns any of these into [`CatalogError::Invalid`]; otherwise each
//! one is logged at `warn` and the data is used unchanged.

mod error;
mod model;
mod source;
mod store;

pub use error::{CatalogError, CatalogIssue};
pub use model::{
    Coordinates, FinancialAssistance, Hospital, InsuranceRates, PlanPriceRange, PlanRates,
    Procedure, ProcedurePrice,
};
pub use source::{
    BundledSource, CatalogConfig, CatalogSource, JsonFileSource, JsonStrSource, RawCatalog,
    SourceConfig,
};
pub use store::Catalog;
