use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PricingError;

/// Insurance providers a caller can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsuranceProvider {
    Aetna,
    Bcbs,
    Uhc,
    Cigna,
    Humana,
}

impl InsuranceProvider {
    pub const ALL: [InsuranceProvider; 5] = [
        InsuranceProvider::Aetna,
        InsuranceProvider::Bcbs,
        InsuranceProvider::Uhc,
        InsuranceProvider::Cigna,
        InsuranceProvider::Humana,
    ];

    /// Identifier used as the key in hospital rate tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            InsuranceProvider::Aetna => "aetna",
            InsuranceProvider::Bcbs => "bcbs",
            InsuranceProvider::Uhc => "uhc",
            InsuranceProvider::Cigna => "cigna",
            InsuranceProvider::Humana => "humana",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InsuranceProvider::Aetna => "Aetna",
            InsuranceProvider::Bcbs => "Blue Cross Blue Shield",
            InsuranceProvider::Uhc => "UnitedHealthcare",
            InsuranceProvider::Cigna => "Cigna",
            InsuranceProvider::Humana => "Humana",
        }
    }

    /// Plan types offered for selection under this provider.
    pub fn plans(&self) -> &'static [&'static str] {
        match self {
            InsuranceProvider::Aetna | InsuranceProvider::Uhc | InsuranceProvider::Humana => {
                &["PPO", "HMO", "EPO"]
            }
            InsuranceProvider::Bcbs | InsuranceProvider::Cigna => &["PPO", "HMO", "POS"],
        }
    }
}

impl fmt::Display for InsuranceProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InsuranceProvider {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        InsuranceProvider::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PricingError::UnknownInsurance(s.to_string()))
    }
}

/// What the caller is paying with: cash, or a specific provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum InsuranceSelection {
    #[default]
    Cash,
    Provider(InsuranceProvider),
}

impl InsuranceSelection {
    pub const CASH: &'static str = "cash";

    pub fn as_str(&self) -> &'static str {
        match self {
            InsuranceSelection::Cash => Self::CASH,
            InsuranceSelection::Provider(provider) => provider.as_str(),
        }
    }

    pub fn provider(&self) -> Option<InsuranceProvider> {
        match self {
            InsuranceSelection::Cash => None,
            InsuranceSelection::Provider(provider) => Some(*provider),
        }
    }
}

impl fmt::Display for InsuranceSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InsuranceSelection {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(Self::CASH) {
            return Ok(InsuranceSelection::Cash);
        }
        s.parse().map(InsuranceSelection::Provider)
    }
}

impl TryFrom<String> for InsuranceSelection {
    type Error = PricingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<InsuranceSelection> for String {
    fn from(value: InsuranceSelection) -> Self {
        value.as_str().to_string()
    }
}

impl From<InsuranceProvider> for InsuranceSelection {
    fn from(value: InsuranceProvider) -> Self {
        InsuranceSelection::Provider(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_parses_cash_and_providers() {
        assert_eq!("cash".parse::<InsuranceSelection>().unwrap(), InsuranceSelection::Cash);
        assert_eq!(
            " Aetna ".parse::<InsuranceSelection>().unwrap(),
            InsuranceSelection::Provider(InsuranceProvider::Aetna)
        );
        let err = "kaiser".parse::<InsuranceSelection>().unwrap_err();
        assert!(matches!(err, PricingError::UnknownInsurance(ref s) if s == "kaiser"));
    }

    #[test]
    fn selection_serializes_as_plain_string() {
        let json = serde_json::to_string(&InsuranceSelection::Provider(InsuranceProvider::Bcbs))
            .unwrap();
        assert_eq!(json, "\"bcbs\"");
        let back: InsuranceSelection = serde_json::from_str("\"cash\"").unwrap();
        assert_eq!(back, InsuranceSelection::Cash);
        assert!(serde_json::from_str::<InsuranceSelection>("\"medicare\"").is_err());
    }

    #[test]
    fn plan_options_per_provider() {
        assert_eq!(InsuranceProvider::Aetna.plans(), ["PPO", "HMO", "EPO"]);
        assert_eq!(InsuranceProvider::Cigna.plans(), ["PPO", "HMO", "POS"]);
        assert_eq!(InsuranceProvider::Uhc.label(), "UnitedHealthcare");
    }
}
