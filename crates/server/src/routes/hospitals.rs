use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::{Path, State};
use axum::Json;
use catalog::Hospital;
use serde::Serialize;
use std::sync::Arc;

/// Hospital record plus how much to trust its prices today
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalResponse {
    #[serde(flatten)]
    pub hospital: Arc<Hospital>,
    pub confidence_score: u8,
}

/// Get a hospital by id
pub async fn get_hospital(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> ServerResult<Json<HospitalResponse>> {
    let hospital = state
        .catalog()
        .hospital_by_id(&id)
        .cloned()
        .ok_or_else(|| ServerError::NotFound(format!("hospital {id}")))?;

    Ok(Json(HospitalResponse {
        confidence_score: hospital.confidence_score(chrono::Utc::now()),
        hospital,
    }))
}
