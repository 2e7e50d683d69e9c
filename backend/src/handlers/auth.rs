//! Login gate
//!
//! There is no account store: any non-empty email and password pair is let
//! through and the client is sent to the dashboard.

use axum::Json;
use serde::{Deserialize, Serialize};
use shared::validate_login;

use crate::error::{AppError, AppResult};

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub redirect: String,
}

/// Login endpoint handler
pub async fn login(Json(body): Json<LoginRequest>) -> AppResult<Json<LoginResponse>> {
    validate_login(&body.email, &body.password).map_err(|message| {
        let field = if body.email.trim().is_empty() {
            "email"
        } else {
            "password"
        };
        AppError::invalid(field, message)
    })?;

    tracing::info!(email = %body.email.trim(), "Login accepted");

    Ok(Json(LoginResponse {
        redirect: "/dashboard".to_string(),
    }))
}
