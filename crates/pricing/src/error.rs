use thiserror::Error;

/// Errors produced at the pricing boundary.
///
/// Resolution itself never fails; these only arise when parsing caller input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PricingError {
    #[error("unknown insurance selection: {0:?} (expected \"cash\" or one of aetna, bcbs, uhc, cigna, humana)")]
    UnknownInsurance(String),
}
