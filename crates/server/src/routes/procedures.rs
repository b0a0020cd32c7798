use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use catalog::Procedure;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const MAX_SUGGESTIONS: usize = 50;

/// Query parameters for procedure suggestions
#[derive(Debug, Deserialize)]
pub struct SuggestQuery {
    /// Partially typed name, category or code
    #[serde(default)]
    pub q: String,

    /// Maximum suggestions to return
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    10
}

/// Suggestion response
#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub query: String,
    pub total: usize,
    pub procedures: Vec<Arc<Procedure>>,
}

/// Type-ahead procedure suggestions
pub async fn suggest_procedures(
    State(state): State<Arc<ServerState>>,
    query: Result<Query<SuggestQuery>, QueryRejection>,
) -> ServerResult<Json<SuggestResponse>> {
    let Query(query) = query.map_err(|e| ServerError::InvalidQuery(e.body_text()))?;
    let limit = query.limit.min(MAX_SUGGESTIONS);
    let procedures = state.catalog().suggest_procedures(&query.q, limit);

    Ok(Json(SuggestResponse {
        total: procedures.len(),
        query: query.q,
        procedures,
    }))
}

/// Get a procedure by CPT code
pub async fn get_procedure(
    State(state): State<Arc<ServerState>>,
    Path(code): Path<String>,
) -> ServerResult<Json<Arc<Procedure>>> {
    state
        .catalog()
        .procedure_by_code(&code)
        .cloned()
        .map(Json)
        .ok_or_else(|| ServerError::NotFound(format!("procedure {code}")))
}
