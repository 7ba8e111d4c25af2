use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::api::state::AppState;
use crate::auth::verify_token;
use crate::error::AppError;

/// Authentication middleware - validates bearer tokens
///
/// A missing or non-bearer Authorization header is a 401; a token that fails
/// verification (bad signature, malformed, expired) is a 403. On success the
/// decoded claims are stored in request extensions for downstream handlers.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::MissingToken)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(AppError::MissingToken)?;

    let claims = verify_token(token, &state.config.jwt_secret)?;

    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}
