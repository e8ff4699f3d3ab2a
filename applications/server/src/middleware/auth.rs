/// Admin authentication middleware
use crate::{error::ServerError, services::CredentialHasher, state::AppState};
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

/// Middleware that checks the static admin bearer token
pub async fn admin_auth_middleware(
    State(app_state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ServerError> {
    let not_authenticated = || ServerError::Auth("Not authenticated".to_string());

    let expected = app_state.admin_token.as_deref().ok_or_else(not_authenticated)?;

    // Extract Authorization header and check Bearer prefix
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or_else(not_authenticated)?;

    // Compare digests, not raw tokens
    let hasher = CredentialHasher::new();
    if hasher.digest(token) != hasher.digest(expected) {
        tracing::warn!("Admin token verification failed");
        return Err(not_authenticated());
    }

    Ok(next.run(request).await)
}
