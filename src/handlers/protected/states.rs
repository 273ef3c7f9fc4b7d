use axum::{
    extract::{Path, State},
    Json,
};

use crate::app::AppState;
use crate::database::models::{State as StateRecord, StateStats};
use crate::error::ApiResult;

/// GET /states/ - every state in store order
pub async fn list_states(State(state): State<AppState>) -> ApiResult<Json<Vec<StateRecord>>> {
    Ok(Json(state.service.list_states().await?))
}

/// GET /states/:stateId/
pub async fn get_state(
    State(state): State<AppState>,
    Path(state_id): Path<i64>,
) -> ApiResult<Json<StateRecord>> {
    Ok(Json(state.service.get_state(state_id).await?))
}

/// GET /states/:stateId/stats/ - case totals across the state's districts
pub async fn state_stats(
    State(state): State<AppState>,
    Path(state_id): Path<i64>,
) -> ApiResult<Json<StateStats>> {
    Ok(Json(state.service.state_stats(state_id).await?))
}
