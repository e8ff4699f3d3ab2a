/// Registration and login API routes
use crate::{
    error::Result,
    services::Credentials,
    state::AppState,
};
use acue_core::PublicUser;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub message: String,
    pub user: PublicUser,
}

/// POST /api/register
pub async fn register(
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<Credentials>, JsonRejection>,
) -> Result<Json<AccountResponse>> {
    let Json(credentials) = payload?;
    let user = app_state.accounts.register(&credentials).await?;

    Ok(Json(AccountResponse {
        message: "User created successfully".to_string(),
        user,
    }))
}

/// POST /api/login
pub async fn login(
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<Credentials>, JsonRejection>,
) -> Result<Json<AccountResponse>> {
    let Json(credentials) = payload?;
    let user = app_state.accounts.login(&credentials).await?;

    Ok(Json(AccountResponse {
        message: "Login successful".to_string(),
        user,
    }))
}
