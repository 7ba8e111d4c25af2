use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::auth::{hash_password, issue_token, verify_password};
use crate::db::{User, UserRepository};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
}

/// POST /api/auth/signup
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<User>), AppError> {
    if req.username.is_empty() || req.password.is_empty() {
        return Err(AppError::Validation(
            "Username and password are required".to_string(),
        ));
    }

    if UserRepository::get_by_username(&state.db, &req.username)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict("Username already taken".to_string()));
    }

    let password_hash = hash_password(&req.password)?;
    let user = UserRepository::create(&state.db, &req.username, &password_hash).await?;

    tracing::debug!("registered user {} (id {})", user.username, user.id);

    // The hash column is skip_serializing, so the response is the user minus
    // the credential.
    Ok((StatusCode::CREATED, Json(user)))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    // Unknown user and wrong password are indistinguishable to the caller.
    let user = UserRepository::get_by_username(&state.db, &req.username)
        .await?
        .ok_or_else(|| AppError::Auth("Invalid credentials".to_string()))?;

    if !verify_password(&req.password, &user.password_hash) {
        return Err(AppError::Auth("Invalid credentials".to_string()));
    }

    let token = issue_token(
        user.id,
        &state.config.jwt_secret,
        state.config.token_expiry_hours,
    )?;

    Ok(Json(LoginResponse {
        token,
        username: user.username,
    }))
}
