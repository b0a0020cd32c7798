use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use catalog::{Hospital, Procedure};
use pricing::{InsuranceSelection, PriceInfo};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::distance::{is_valid_zip, DistanceTier};

/// A single search against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    /// Free text or a CPT code.
    pub procedure: String,
    /// The caller's 5-digit ZIP code.
    #[serde(alias = "zip_code")]
    pub zip_code: String,
    /// `cash` or a provider identifier; defaults to cash.
    #[serde(default)]
    pub insurance: InsuranceSelection,
    /// Optional plan name under the selected provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
}

impl SearchParams {
    /// Cash-price search for `procedure` near `zip_code`.
    pub fn new<P: Into<String>, Z: Into<String>>(procedure: P, zip_code: Z) -> Self {
        Self {
            procedure: procedure.into(),
            zip_code: zip_code.into(),
            insurance: InsuranceSelection::Cash,
            plan: None,
        }
    }

    pub fn with_insurance(mut self, insurance: InsuranceSelection) -> Self {
        self.insurance = insurance;
        self
    }

    pub fn with_plan<S: Into<String>>(mut self, plan: S) -> Self {
        self.plan = Some(plan.into());
        self
    }

    /// Reject queries the matcher cannot answer meaningfully.
    ///
    /// A blank procedure would match every catalog entry by name, and a ZIP
    /// that is not five digits cannot be bucketed.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.procedure.trim().is_empty() {
            return Err(SearchError::InvalidQuery(
                "procedure must not be empty".into(),
            ));
        }
        if !is_valid_zip(&self.zip_code) {
            return Err(SearchError::InvalidQuery(format!(
                "zip code must be exactly 5 digits, got {:?}",
                self.zip_code
            )));
        }
        Ok(())
    }
}

/// One hospital's answer to a search. Rebuilt on every query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalResult {
    pub hospital: Arc<Hospital>,
    pub price_info: PriceInfo,
    pub distance: DistanceTier,
    pub procedure: Arc<Procedure>,
}

impl HospitalResult {
    pub fn display_price(&self) -> f64 {
        self.price_info.display_price()
    }
}

/// Orders a result list can be viewed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Lowest display price first.
    #[default]
    Price,
    /// Closest tier first.
    Distance,
    /// Highest rating first.
    Rating,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Price => "price",
            SortKey::Distance => "distance",
            SortKey::Rating => "rating",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "price" => Ok(SortKey::Price),
            "distance" => Ok(SortKey::Distance),
            "rating" => Ok(SortKey::Rating),
            _ => Err(SearchError::UnknownSortKey(s.to_string())),
        }
    }
}

/// Errors produced by the search layer.
///
/// Not finding anything is not an error; searches return an empty list.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The query failed boundary validation.
    #[error("invalid query: {0}")]
    InvalidQuery(String),
    #[error("unknown sort key: {0:?} (expected price, distance or rating)")]
    UnknownSortKey(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricing::InsuranceProvider;

    #[test]
    fn valid_params_pass() {
        let params = SearchParams::new("72148", "10001")
            .with_insurance(InsuranceProvider::Aetna.into())
            .with_plan("PPO");
        assert!(params.validate().is_ok());
    }

    #[test]
    fn blank_procedure_rejected() {
        for procedure in ["", "   ", "\t\n"] {
            let err = SearchParams::new(procedure, "10001").validate().unwrap_err();
            match err {
                SearchError::InvalidQuery(msg) => assert!(msg.contains("procedure")),
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn malformed_zip_rejected() {
        for zip in ["", "1000", "100011", "10a01", " 10001"] {
            let err = SearchParams::new("72148", zip).validate().unwrap_err();
            assert!(matches!(err, SearchError::InvalidQuery(ref msg) if msg.contains("zip")));
        }
    }

    #[test]
    fn params_use_camel_case_on_the_wire() {
        let params: SearchParams = serde_json::from_str(
            r#"{"procedure":"72148","zipCode":"10001","insurance":"aetna","plan":"PPO"}"#,
        )
        .unwrap();
        assert_eq!(params.zip_code, "10001");
        assert_eq!(params.insurance, InsuranceProvider::Aetna.into());
        assert_eq!(params.plan.as_deref(), Some("PPO"));

        let defaulted: SearchParams =
            serde_json::from_str(r#"{"procedure":"x","zip_code":"10001"}"#).unwrap();
        assert_eq!(defaulted.insurance, InsuranceSelection::Cash);
        assert!(defaulted.plan.is_none());
    }

    #[test]
    fn sort_key_parses() {
        assert_eq!("Rating".parse::<SortKey>().unwrap(), SortKey::Rating);
        assert_eq!(SortKey::default(), SortKey::Price);
        assert!(matches!(
            "cheapest".parse::<SortKey>(),
            Err(SearchError::UnknownSortKey(_))
        ));
    }
}
