use catalog::{InsuranceRates, ProcedurePrice};
use serde::Serialize;

use crate::insurance::InsuranceSelection;
use crate::price::PriceInfo;

/// Which rule produced a [`PriceInfo`].
///
/// Several fallbacks collapse onto the same price shape; keeping them apart
/// lets callers and tests tell, for instance, a missing plan from no plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceBasis {
    /// The caller chose cash.
    CashSelected,
    /// The hospital publishes no rates for the chosen provider.
    ProviderNotListed,
    /// The provider is listed but has no plans; priced as cash.
    ProviderWithoutPlans,
    /// The chosen plan exists under the provider.
    PlanMatched,
    /// No plan was chosen; range spans all of the provider's plans.
    AggregatedNoPlan,
    /// A plan was chosen but the provider does not list it. Aggregated the
    /// same way as [`PriceBasis::AggregatedNoPlan`] rather than rejected.
    AggregatedPlanNotFound,
}

/// Resolve the price a caller sees for one hospital's procedure.
///
/// Rules, first match wins:
/// 1. cash selected -> cash price;
/// 2. provider absent from `insurance_rates` -> cash price;
/// 3. plan given and present under the provider -> that plan's range;
/// 4. otherwise -> min of plan minimums and max of plan maximums across the
///    provider's plans, or the cash price if it has none.
///
/// Ranges are reported exactly as stored.
pub fn resolve(
    insurance_rates: &InsuranceRates,
    cash_price: f64,
    selection: InsuranceSelection,
    plan: Option<&str>,
) -> PriceInfo {
    resolve_with_basis(insurance_rates, cash_price, selection, plan).0
}

/// [`resolve`] against a catalog [`ProcedurePrice`].
pub fn resolve_price(
    price: &ProcedurePrice,
    selection: InsuranceSelection,
    plan: Option<&str>,
) -> PriceInfo {
    resolve(&price.insurance_rates, price.cash_price, selection, plan)
}

/// [`resolve`], also reporting which rule applied.
pub fn resolve_with_basis(
    insurance_rates: &InsuranceRates,
    cash_price: f64,
    selection: InsuranceSelection,
    plan: Option<&str>,
) -> (PriceInfo, PriceBasis) {
    let cash = PriceInfo::Cash { value: cash_price };

    let provider = match selection {
        InsuranceSelection::Cash => return (cash, PriceBasis::CashSelected),
        InsuranceSelection::Provider(provider) => provider,
    };

    let Some(plans) = insurance_rates.get(provider.as_str()) else {
        return (cash, PriceBasis::ProviderNotListed);
    };

    let plan = plan.filter(|name| !name.is_empty());
    if let Some(name) = plan {
        if let Some(range) = plans.get(name) {
            let info = PriceInfo::PlanRange {
                min: range.min,
                max: range.max,
                plan_name: name.to_string(),
            };
            return (info, PriceBasis::PlanMatched);
        }
    }

    if plans.is_empty() {
        return (cash, PriceBasis::ProviderWithoutPlans);
    }

    let min = plans
        .values()
        .map(|range| range.min)
        .fold(f64::INFINITY, f64::min);
    let max = plans
        .values()
        .map(|range| range.max)
        .fold(f64::NEG_INFINITY, f64::max);
    let basis = if plan.is_some() {
        PriceBasis::AggregatedPlanNotFound
    } else {
        PriceBasis::AggregatedNoPlan
    };
    (PriceInfo::InsuranceRange { min, max }, basis)
}
