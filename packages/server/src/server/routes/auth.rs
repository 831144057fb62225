use axum::{extract::rejection::JsonRejection, extract::Extension, Json};
use serde::Deserialize;

use crate::domains::auth::{current_user, login, register, AuthResponse, CurrentUser};
use crate::server::app::AppState;
use crate::server::error::ApiError;
use crate::server::middleware::AuthUser;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

pub async fn register_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, ApiError> {
    let Json(request) = payload?;
    let response = register(
        &request.username,
        &request.email,
        &request.password,
        &state.server_deps,
    )
    .await?;
    Ok(Json(response))
}

pub async fn login_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, ApiError> {
    let Json(request) = payload?;
    let response = login(&request.username, &request.password, &state.server_deps).await?;
    Ok(Json(response))
}

/// Profile of the token's user. A token for a deleted account is treated as anonymous.
pub async fn me_handler(
    Extension(state): Extension<AppState>,
    user: AuthUser,
) -> Result<Json<CurrentUser>, ApiError> {
    current_user(user.user_id, &state.server_deps)
        .await?
        .map(Json)
        .ok_or(ApiError::Unauthorized)
}
