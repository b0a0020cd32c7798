use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building or loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {what}: {source}")]
    Parse {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("duplicate procedure code: {0}")]
    DuplicateProcedure(String),
    #[error("duplicate hospital id: {0}")]
    DuplicateHospital(String),
    #[error("catalog failed validation with {} issue(s); first: {}", .0.len(), first_issue(.0))]
    Invalid(Vec<CatalogIssue>),
}

fn first_issue(issues: &[CatalogIssue]) -> String {
    issues
        .first()
        .map(ToString::to_string)
        .unwrap_or_default()
}

/// Data-consistency problems found by [`crate::Catalog::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogIssue {
    #[error("{hospital_id}/{cpt_code}: {provider} {plan} range is inverted ({min} > {max})")]
    InvertedPlanRange {
        hospital_id: String,
        cpt_code: String,
        provider: String,
        plan: String,
        min: f64,
        max: f64,
    },
    #[error("{hospital_id}/{cpt_code}: {field} is negative ({value})")]
    NegativePrice {
        hospital_id: String,
        cpt_code: String,
        field: &'static str,
        value: f64,
    },
    #[error("{hospital_id}: rating {rating} is outside [0, 5]")]
    RatingOutOfRange { hospital_id: String, rating: f64 },
    #[error("{hospital_id}: price listed for unknown procedure {cpt_code}")]
    UnknownProcedure {
        hospital_id: String,
        cpt_code: String,
    },
}
