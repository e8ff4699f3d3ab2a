/// API route modules
pub mod accounts;
pub mod admin;
pub mod health;
pub mod landing;

use crate::{middleware, state::AppState};
use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the full application router
///
/// Admin routes are only mounted when `app_state` carries an admin token.
pub fn create_router(app_state: AppState) -> Router {
    let mut api_routes = Router::new()
        .route("/health", get(health::health))
        .route("/register", post(accounts::register))
        .route("/login", post(accounts::login));

    if app_state.admin_token.is_some() {
        let admin_routes = Router::new()
            .route("/admin/users", get(admin::list_users))
            .layer(axum_middleware::from_fn_with_state(
                app_state.clone(),
                middleware::admin_auth_middleware,
            ));
        api_routes = api_routes.merge(admin_routes);
    }

    Router::new()
        .route("/", get(landing::index))
        .nest("/api", api_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(false)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
