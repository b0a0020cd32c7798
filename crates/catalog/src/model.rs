use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Negotiated price interval for a single insurance plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanPriceRange {
    pub min: f64,
    pub max: f64,
}

impl PlanPriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// `true` when the range satisfies `min <= max`.
    pub fn is_ordered(&self) -> bool {
        self.min <= self.max
    }
}

/// Plan name -> negotiated range, for one insurance provider.
pub type PlanRates = BTreeMap<String, PlanPriceRange>;

/// Provider identifier (e.g. `aetna`) -> that provider's plans.
pub type InsuranceRates = BTreeMap<String, PlanRates>;

/// A medical procedure, keyed by its CPT code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Procedure {
    /// 5-character CPT code; the join key into each hospital's price table.
    pub cpt_code: String,
    pub name: String,
    pub category: String,
    pub description: String,
    /// Advisory notes shown alongside results.
    #[serde(default)]
    pub insights: Vec<String>,
}

/// Price data a hospital publishes for one procedure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcedurePrice {
    /// List price; display only.
    pub gross_charge: f64,
    /// Self-pay price.
    pub cash_price: f64,
    #[serde(default)]
    pub insurance_rates: InsuranceRates,
}

impl ProcedurePrice {
    /// Plans published for `provider`, if the hospital lists that provider at all.
    pub fn provider_rates(&self, provider: &str) -> Option<&PlanRates> {
        self.insurance_rates.get(provider)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Financial assistance program offered by a hospital.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialAssistance {
    pub available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eligibility_criteria: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income_threshold: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hospital {
    pub id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub phone: String,
    /// Patient rating in `[0, 5]`.
    pub rating: f64,
    /// When the price data was last refreshed (`YYYY-MM-DD` or RFC 3339).
    pub data_freshness: String,
    /// Map position. Not used for distance tiers.
    pub coordinates: Coordinates,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financial_assistance: Option<FinancialAssistance>,
    /// CPT code -> published price.
    #[serde(default)]
    pub prices: BTreeMap<String, ProcedurePrice>,
}

impl Hospital {
    pub fn price_for(&self, cpt_code: &str) -> Option<&ProcedurePrice> {
        self.prices.get(cpt_code)
    }

    /// Parse `data_freshness` into a UTC instant (midnight for bare dates).
    pub fn refreshed_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.data_freshness.trim();
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Some(date.and_time(NaiveTime::MIN).and_utc());
        }
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|ts| ts.with_timezone(&Utc))
    }

    /// Confidence in the published prices, decaying with the age of the data.
    ///
    /// 95 up to 30 days old, then 85 / 75 / 60 at the 60 / 90 / 180 day marks,
    /// and 50 beyond that or when the timestamp cannot be parsed.
    pub fn confidence_score(&self, now: DateTime<Utc>) -> u8 {
        let Some(refreshed) = self.refreshed_at() else {
            return 50;
        };
        match (now - refreshed).num_days() {
            days if days <= 30 => 95,
            days if days <= 60 => 85,
            days if days <= 90 => 75,
            days if days <= 180 => 60,
            _ => 50,
        }
    }
}
