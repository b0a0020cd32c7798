use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::format::format_currency;

/// Displayable price for one hospital and procedure.
///
/// Exactly one shape applies: a single cash value, the range of one named
/// plan, or the range spanning every plan a provider offers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PriceInfo {
    Cash {
        value: f64,
    },
    PlanRange {
        min: f64,
        max: f64,
        #[serde(rename = "planName")]
        plan_name: String,
    },
    InsuranceRange {
        min: f64,
        max: f64,
    },
}

/// Discriminant of a [`PriceInfo`], for callers that only need the shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceKind {
    Cash,
    PlanRange,
    InsuranceRange,
}

impl PriceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceKind::Cash => "cash",
            PriceKind::PlanRange => "plan_range",
            PriceKind::InsuranceRange => "insurance_range",
        }
    }
}

impl fmt::Display for PriceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PriceInfo {
    pub fn kind(&self) -> PriceKind {
        match self {
            PriceInfo::Cash { .. } => PriceKind::Cash,
            PriceInfo::PlanRange { .. } => PriceKind::PlanRange,
            PriceInfo::InsuranceRange { .. } => PriceKind::InsuranceRange,
        }
    }

    /// Single comparable number used for sorting: the cash value, or the
    /// lower bound of a range.
    pub fn display_price(&self) -> f64 {
        match self {
            PriceInfo::Cash { value } => *value,
            PriceInfo::PlanRange { min, .. } | PriceInfo::InsuranceRange { min, .. } => *min,
        }
    }

    /// `(min, max)` for range shapes, `None` for cash.
    pub fn range(&self) -> Option<(f64, f64)> {
        match self {
            PriceInfo::Cash { .. } => None,
            PriceInfo::PlanRange { min, max, .. } | PriceInfo::InsuranceRange { min, max } => {
                Some((*min, *max))
            }
        }
    }

    pub fn plan_name(&self) -> Option<&str> {
        match self {
            PriceInfo::PlanRange { plan_name, .. } => Some(plan_name),
            _ => None,
        }
    }

    /// Total order on display price. NaN sorts after every number so a bad
    /// record cannot make ordering nondeterministic.
    pub fn cmp_display_price(&self, other: &PriceInfo) -> Ordering {
        self.display_price().total_cmp(&other.display_price())
    }
}

impl fmt::Display for PriceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceInfo::Cash { value } => f.write_str(&format_currency(*value)),
            PriceInfo::PlanRange { min, max, .. } | PriceInfo::InsuranceRange { min, max } => {
                write!(f, "{} - {}", format_currency(*min), format_currency(*max))
            }
        }
    }
}
