use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::Json;
use catalog::{Hospital, Procedure};
use matcher::{DistanceTier, HospitalResult, SearchParams, SortKey};
use pricing::{InsuranceSelection, PriceInfo, PriceKind};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Search request, accepted as a JSON body or as query parameters
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// Free text or CPT code
    #[serde(default)]
    pub procedure: String,

    /// Caller's 5-digit ZIP code
    #[serde(default, alias = "zip_code", alias = "zip")]
    pub zip_code: String,

    /// `cash` (default) or a provider identifier
    #[serde(default)]
    pub insurance: Option<String>,

    /// Plan name under the selected provider
    #[serde(default)]
    pub plan: Option<String>,

    /// `price` (default), `distance` or `rating`
    #[serde(default)]
    pub sort: Option<String>,
}

impl SearchRequest {
    /// Parse the string fields into typed search parameters and a sort key.
    pub fn into_params(self) -> ServerResult<(SearchParams, SortKey)> {
        let insurance = match self.insurance.as_deref() {
            Some(raw) if !raw.trim().is_empty() => raw.parse::<InsuranceSelection>()?,
            _ => InsuranceSelection::Cash,
        };
        let sort = match self.sort.as_deref() {
            Some(raw) if !raw.trim().is_empty() => raw.parse::<SortKey>()?,
            _ => SortKey::default(),
        };

        let mut params = SearchParams::new(self.procedure, self.zip_code).with_insurance(insurance);
        params.plan = self.plan.filter(|plan| !plan.trim().is_empty());
        Ok((params, sort))
    }
}

/// One ranked hospital in a search response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultView {
    /// 1-based position in the requested order
    pub rank: usize,
    pub hospital: Arc<Hospital>,
    pub price_info: PriceInfo,
    pub display_price: f64,
    pub formatted_price: String,
    pub distance: DistanceTier,
    pub distance_label: &'static str,
    pub confidence_score: u8,
}

/// Search response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// Procedure the query resolved to, absent when nothing matched
    pub procedure: Option<Arc<Procedure>>,
    pub insurance: InsuranceSelection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    pub sort: SortKey,
    /// Price shape of the first result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_kind: Option<PriceKind>,
    pub total: usize,
    pub results: Vec<SearchResultView>,
}

/// Search by JSON body
pub async fn search_post(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> ServerResult<Json<SearchResponse>> {
    let Json(request) = payload.map_err(|e| ServerError::BadRequest(e.body_text()))?;
    run_search(&state, request).map(Json)
}

/// Search by query string
pub async fn search_get(
    State(state): State<Arc<ServerState>>,
    query: Result<Query<SearchRequest>, QueryRejection>,
) -> ServerResult<Json<SearchResponse>> {
    let Query(request) = query.map_err(|e| ServerError::InvalidQuery(e.body_text()))?;
    run_search(&state, request).map(Json)
}

fn run_search(state: &ServerState, request: SearchRequest) -> ServerResult<SearchResponse> {
    let (params, sort) = request.into_params()?;
    let results = state.engine.search_sorted(&params, sort)?;

    let procedure = results
        .first()
        .map(|r| Arc::clone(&r.procedure))
        .or_else(|| state.engine.match_procedure(&params.procedure).cloned());
    let price_kind = results.first().map(|r| r.price_info.kind());
    let now = chrono::Utc::now();

    tracing::info!(
        procedure = %params.procedure,
        insurance = %params.insurance,
        sort = %sort,
        results = results.len(),
        "search served"
    );

    Ok(SearchResponse {
        procedure,
        insurance: params.insurance,
        plan: params.plan,
        sort,
        price_kind,
        total: results.len(),
        results: results
            .into_iter()
            .enumerate()
            .map(|(index, result)| view(index + 1, result, now))
            .collect(),
    })
}

fn view(rank: usize, result: HospitalResult, now: chrono::DateTime<chrono::Utc>) -> SearchResultView {
    SearchResultView {
        rank,
        display_price: result.display_price(),
        formatted_price: result.price_info.to_string(),
        distance_label: result.distance.label(),
        confidence_score: result.hospital.confidence_score(now),
        distance: result.distance,
        price_info: result.price_info,
        hospital: result.hospital,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricing::InsuranceProvider;

    #[test]
    fn test_request_defaults_to_cash_and_price() {
        let request = SearchRequest {
            procedure: "72148".into(),
            zip_code: "10001".into(),
            ..Default::default()
        };
        let (params, sort) = request.into_params().unwrap();
        assert_eq!(params.insurance, InsuranceSelection::Cash);
        assert_eq!(sort, SortKey::Price);
        assert!(params.plan.is_none());
    }

    #[test]
    fn test_request_parses_insurance_plan_and_sort() {
        let request: SearchRequest = serde_json::from_str(
            r#"{"procedure":"mri","zipCode":"10001","insurance":"Aetna","plan":"PPO","sort":"rating"}"#,
        )
        .unwrap();
        let (params, sort) = request.into_params().unwrap();
        assert_eq!(params.insurance, InsuranceProvider::Aetna.into());
        assert_eq!(params.plan.as_deref(), Some("PPO"));
        assert_eq!(sort, SortKey::Rating);
    }

    #[test]
    fn test_unknown_insurance_is_invalid_query() {
        let request = SearchRequest {
            procedure: "72148".into(),
            zip_code: "10001".into(),
            insurance: Some("acme".into()),
            ..Default::default()
        };
        let err = request.into_params().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_QUERY");
    }

    #[test]
    fn test_blank_plan_is_dropped() {
        let request = SearchRequest {
            procedure: "72148".into(),
            zip_code: "10001".into(),
            insurance: Some("aetna".into()),
            plan: Some("  ".into()),
            sort: None,
        };
        let (params, _) = request.into_params().unwrap();
        assert!(params.plan.is_none());
    }
}
