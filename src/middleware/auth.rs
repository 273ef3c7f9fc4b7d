use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::app::AppState;
use crate::auth::Claims;

/// Why the gate turned a request away. Both render identically so callers
/// cannot tell how verification failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    MissingToken,
    InvalidToken,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (StatusCode::UNAUTHORIZED, "Invalid JWT Token").into_response()
    }
}

/// JWT gate for every protected route.
///
/// Authorization is flat: any valid token grants the same access. The decoded
/// claims are attached to the request for tracing and otherwise unused.
pub async fn jwt_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let claims = authenticate(&state, request.headers())?;

    tracing::debug!("Authenticated request from '{}'", claims.username);
    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}

fn authenticate(state: &AppState, headers: &HeaderMap) -> Result<Claims, AuthError> {
    let token = extract_jwt_from_headers(headers).ok_or_else(|| {
        tracing::warn!("Rejected request: missing bearer token");
        AuthError::MissingToken
    })?;

    state.service.tokens().validate(token).map_err(|_| {
        tracing::warn!("Rejected request: invalid bearer token");
        AuthError::InvalidToken
    })
}

/// The token is the second space-separated word of the Authorization header.
fn extract_jwt_from_headers(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .split(' ')
        .nth(1)
        .filter(|token| !token.is_empty())
}
