//! Handlers de login e cadastro (`/api/auth/*`).

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::state::AppState;
use crate::auth::{LoginRequest, RegisterRequest, User};
use crate::error::{ApiError, ApiResult};

/// POST `/api/auth/login`
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<User>> {
    let Json(req) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    if req.email.is_empty() || req.password.is_empty() {
        return Err(ApiError::Validation(
            "Por favor completa todos los campos".to_string(),
        ));
    }
    state
        .users
        .login(&req.email, &req.password)
        .map(Json)
        .ok_or(ApiError::InvalidCredentials)
}

/// POST `/api/auth/register` — 201 com o usuário criado.
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let Json(req) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let user = state.users.register(req)?;
    Ok((StatusCode::CREATED, Json(user)))
}
