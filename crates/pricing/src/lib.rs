//! # CareCost Pricing (`pricing`)
//!
//! Turns a hospital's published rates and a caller's insurance choice into a
//! [`PriceInfo`]: a single cash value, one plan's negotiated range, or the
//! range spanning every plan of a provider.
//!
//! ```
//! use catalog::{InsuranceRates, PlanPriceRange, PlanRates};
//! use pricing::{resolve, InsuranceProvider, InsuranceSelection, PriceInfo};
//!
//! let mut plans = PlanRates::new();
//! plans.insert("PPO".into(), PlanPriceRange::new(800.0, 1000.0));
//! plans.insert("HMO".into(), PlanPriceRange::new(700.0, 900.0));
//! let mut rates = InsuranceRates::new();
//! rates.insert("aetna".into(), plans);
//!
//! let aetna = InsuranceSelection::Provider(InsuranceProvider::Aetna);
//! assert_eq!(
//!     resolve(&rates, 1500.0, aetna, None),
//!     PriceInfo::InsuranceRange { min: 700.0, max: 1000.0 },
//! );
//! assert_eq!(
//!     resolve(&rates, 1500.0, InsuranceSelection::Cash, None),
//!     PriceInfo::Cash { value: 1500.0 },
//! );
//! ```
//!
//! Unknown providers and plans are not errors: they fall back to the cash
//! price or to the provider-wide range. [`resolve_with_basis`] reports which
//! fallback applied.

mod error;
mod format;
mod insurance;
mod price;
mod resolve;

pub use error::PricingError;
pub use format::format_currency;
pub use insurance::{InsuranceProvider, InsuranceSelection};
pub use price::{PriceInfo, PriceKind};
pub use resolve::{resolve, resolve_price, resolve_with_basis, PriceBasis};
