// handlers/public/login.rs - POST /login/

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::app::AppState;
use crate::error::ApiResult;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub jwt_token: String,
}

/// POST /login/ - Authenticate and receive a session token
///
/// Expected Input:
/// ```json
/// { "username": "christopher_phillips", "password": "christy@123" }
/// ```
///
/// Responses:
/// - `200 {"jwtToken": "eyJhbGciOiJIUzI1NiI..."}`
/// - `400 Invalid user` when the username is unknown
/// - `400 Invalid password` when the hash does not match
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let jwt_token = state.service.login(&payload.username, &payload.password).await?;
    Ok(Json(LoginResponse { jwt_token }))
}
