//! HTTP API route definitions.

use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::cors::cors;
use super::handlers::{get_user, get_user_posts, health, ping, search};
use crate::config::ServerMode;
use crate::metrics::track_requests;

/// Create the API router.
pub fn create_router() -> Router {
    Router::new()
        // Health endpoints
        .route("/ping", get(ping))
        .route("/health", get(health))
        // Path and query parameter examples
        .route("/user/:id", get(get_user))
        .route("/search", get(search))
        .route("/user/:id/posts", get(get_user_posts))
        .layer(middleware::from_fn(cors))
        .layer(middleware::from_fn(track_requests))
}

/// Create the router for a server mode. Debug mode traces every request.
pub fn app(mode: ServerMode) -> Router {
    let router = create_router();
    match mode {
        ServerMode::Debug => router.layer(TraceLayer::new_for_http()),
        ServerMode::Release => router,
    }
}
