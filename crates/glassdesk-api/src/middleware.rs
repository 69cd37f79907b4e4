use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Bearer};
use tracing::debug;

use crate::auth::AppState;
use crate::error::ApiError;

/// Gate for identity-scoped routes.
///
/// No `Authorization` header is `MissingToken`. A header that is not a bearer
/// credential, or a token with a bad signature or past its expiry, is
/// `InvalidToken`. On success the verified `Claims` go into request extensions.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let bearer = req
        .headers()
        .typed_try_get::<Authorization<Bearer>>()
        .map_err(|_| ApiError::InvalidToken)?
        .ok_or(ApiError::MissingToken)?;

    let claims = state.tokens.verify(bearer.token()).map_err(|e| {
        debug!("JWT verification error: {}", e);
        ApiError::InvalidToken
    })?;

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}
