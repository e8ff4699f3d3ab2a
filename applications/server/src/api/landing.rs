/// Landing page route
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{extract::State, response::Html};
use std::io::ErrorKind;

/// GET / - serve the configured landing page as-is
pub async fn index(State(app_state): State<AppState>) -> Result<Html<String>> {
    match tokio::fs::read_to_string(&app_state.index_path).await {
        Ok(contents) => Ok(Html(contents)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            Err(ServerError::NotFound("Landing page".to_string()))
        }
        Err(e) => Err(ServerError::Io(e)),
    }
}
