use axum::{
    extract::{Path, State},
    Json,
};

use crate::app::AppState;
use crate::database::models::{District, DistrictFields};
use crate::error::ApiResult;

/// POST /districts/
pub async fn create_district(
    State(state): State<AppState>,
    Json(fields): Json<DistrictFields>,
) -> ApiResult<&'static str> {
    let district_id = state.service.create_district(&fields).await?;
    tracing::info!("Created district {} ({})", district_id, fields.district_name);
    Ok("District Successfully Added")
}

/// GET /districts/:districtId/
pub async fn get_district(
    State(state): State<AppState>,
    Path(district_id): Path<i64>,
) -> ApiResult<Json<District>> {
    Ok(Json(state.service.get_district(district_id).await?))
}

/// PUT /districts/:districtId/ - full replacement, no partial merge
pub async fn update_district(
    State(state): State<AppState>,
    Path(district_id): Path<i64>,
    Json(fields): Json<DistrictFields>,
) -> ApiResult<&'static str> {
    state.service.update_district(district_id, &fields).await?;
    Ok("District Details Updated")
}

/// DELETE /districts/:districtId/ - succeeds whether or not the row existed
pub async fn delete_district(
    State(state): State<AppState>,
    Path(district_id): Path<i64>,
) -> ApiResult<&'static str> {
    state.service.delete_district(district_id).await?;
    Ok("District Removed")
}
