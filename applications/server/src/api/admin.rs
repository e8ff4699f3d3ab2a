/// Admin API routes
use crate::{error::Result, state::AppState};
use acue_core::UserSummary;
use axum::{extract::State, Json};

/// GET /api/admin/users
/// List all accounts without password digests
pub async fn list_users(State(app_state): State<AppState>) -> Result<Json<Vec<UserSummary>>> {
    let users = app_state.accounts.list_users().await?;
    Ok(Json(users))
}
