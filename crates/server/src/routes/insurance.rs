use axum::Json;
use pricing::{InsuranceProvider, InsuranceSelection};
use serde::Serialize;

/// One selectable provider
#[derive(Debug, Serialize)]
pub struct ProviderInfo {
    pub id: &'static str,
    pub label: &'static str,
    pub plans: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct InsuranceResponse {
    /// Identifier meaning "no insurance"
    pub cash: &'static str,
    pub providers: Vec<ProviderInfo>,
}

/// List providers and their plan types
pub async fn list_insurance() -> Json<InsuranceResponse> {
    Json(InsuranceResponse {
        cash: InsuranceSelection::CASH,
        providers: InsuranceProvider::ALL
            .iter()
            .map(|provider| ProviderInfo {
                id: provider.as_str(),
                label: provider.label(),
                plans: provider.plans(),
            })
            .collect(),
    })
}
