use axum::{extract::State, Json};
use contracts::system::auth::{LoginRequest, LoginResponse};

use crate::shared::error::{AppError, AppResult};
use crate::shared::state::AppState;

/// POST /Account/Login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    request.validate().map_err(AppError::BadRequest)?;

    match state.auth.login(request.username.trim(), &request.password)? {
        Some(token) => {
            tracing::info!("User {} logged in", request.username.trim());
            Ok(Json(LoginResponse {
                token,
                username: request.username.trim().to_string(),
            }))
        }
        None => {
            tracing::warn!("Failed login for {}", request.username.trim());
            Err(AppError::InvalidCredentials)
        }
    }
}
