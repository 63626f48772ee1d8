//! Handler for the admin password gate.
//!
//! A single shared secret, compared in plaintext, returning a static opaque
//! token. There is no session store, no expiry, and no per-admin identity;
//! the token is no stronger than the password itself.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use reelcraft_core::error::CoreError;

use crate::error::AppResult;
use crate::state::AppState;

/// The fixed token handed out on successful login.
const ADMIN_TOKEN: &str = "admin-token";

/// Request body for `POST /api/admin/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

/// Response body for a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
}

/// POST /api/admin/login
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    if input.password != state.config.admin_password {
        return Err(CoreError::Unauthorized("Invalid password".into()).into());
    }

    Ok(Json(LoginResponse {
        success: true,
        token: ADMIN_TOKEN.to_string(),
    }))
}
