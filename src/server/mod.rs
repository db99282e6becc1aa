//! HTTP API.
//!
//! | Route                      | Auth                       |
//! |----------------------------|----------------------------|
//! | `GET /health`              | none                       |
//! | `POST /api/actions`        | session cookie             |
//! | `POST /api/prompt/execute` | session cookie or script access |
//!
//! Errors are JSON `{ "error": message }` with 400, 401, 404 or 500.

pub mod auth;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::{AppConfig, ConfigError};
pub use error::ServerError;
pub use state::AppState;

use axum::{middleware, routing::post, Router};
use tower_http::trace::TraceLayer;

/// Builds the application router.
pub fn app(state: AppState) -> Router {
    let prompt_routes = Router::new()
        .route("/api/prompt/execute", post(routes::execute_prompt))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_session_or_script,
        ));

    let action_routes = Router::new()
        .route("/api/actions", post(routes::execute_action))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_session,
        ));

    Router::new()
        .merge(routes::health_routes())
        .merge(prompt_routes)
        .merge(action_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
