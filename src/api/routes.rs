//! API Routes
//!
//! Configures the Axum router for the search endpoint.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{search_handler, AppState};

/// Creates the main router.
///
/// # Endpoints
/// - `GET /:search_term` - Summary or candidate articles for a term
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/:search_term", get(search_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
