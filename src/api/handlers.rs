//! HTTP API handlers.

use axum::{extract::Query, http::Uri, response::IntoResponse, Json};
use serde::Serialize;
use tracing::debug;

use super::path::path_segment;
use super::query::{query_or_default, QueryMap};
use crate::error::ApiError;

/// Ping response.
#[derive(Debug, Serialize)]
pub struct PingResponse {
    /// Always "pong".
    pub message: &'static str,
    /// Always "healthy".
    pub status: &'static str,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service description.
    pub service: &'static str,
    /// Always "running".
    pub status: &'static str,
    /// API version.
    pub version: &'static str,
}

/// Single user lookup response.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user_id: String,
    pub message: &'static str,
}

/// Search response. `results` is a placeholder and always empty.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub limit: String,
    pub page: String,
    pub results: Vec<String>,
}

/// Posts of a user. `posts` is a placeholder and always empty.
#[derive(Debug, Serialize)]
pub struct UserPostsResponse {
    pub user_id: String,
    pub category: String,
    pub sort: String,
    pub posts: Vec<String>,
}

/// Error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Ping handler - always returns 200.
pub async fn ping() -> impl IntoResponse {
    Json(PingResponse {
        message: "pong",
        status: "healthy",
    })
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        service: "Go API with Gin",
        status: "running",
        version: "1.0.0",
    })
}

// `id` in `/user/:id` and `/user/:id/posts`.
const USER_ID_SEGMENT: usize = 2;

fn user_id(uri: &Uri) -> String {
    path_segment(uri.path(), USER_ID_SEGMENT).unwrap_or_default()
}

/// Echoes the `id` path segment verbatim.
pub async fn get_user(uri: Uri) -> impl IntoResponse {
    Json(UserResponse {
        user_id: user_id(&uri),
        message: "User retrieved successfully",
    })
}

/// Search handler - 400 when `q` is absent or empty.
pub async fn search(
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<SearchResponse>, ApiError> {
    let params = QueryMap::from(pairs);

    let query = query_or_default(&params, "q", "");
    if query.is_empty() {
        debug!("search rejected: missing q");
        return Err(ApiError::MissingQueryParameter("q"));
    }

    Ok(Json(SearchResponse {
        query,
        limit: query_or_default(&params, "limit", "10"),
        page: query_or_default(&params, "page", "1"),
        results: Vec::new(),
    }))
}

/// Lists a user's posts, echoing the filters back.
pub async fn get_user_posts(
    uri: Uri,
    Query(pairs): Query<Vec<(String, String)>>,
) -> impl IntoResponse {
    let params = QueryMap::from(pairs);

    Json(UserPostsResponse {
        user_id: user_id(&uri),
        category: query_or_default(&params, "category", "all"),
        sort: query_or_default(&params, "sort", "date"),
        posts: Vec::new(),
    })
}
