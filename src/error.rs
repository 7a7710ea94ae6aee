//! Unified error types for the lab API.

use std::net::SocketAddr;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::api::handlers::ErrorResponse;

/// Errors surfaced to HTTP callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A required query parameter was absent or empty.
    #[error("Query parameter '{0}' is required")]
    MissingQueryParameter(&'static str),
}

impl ApiError {
    /// HTTP status the error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingQueryParameter(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Startup and serving errors.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Host/port pair does not form a socket address.
    #[error("invalid listen address: {addr}")]
    InvalidAddress {
        /// The rejected `host:port` string.
        addr: String,
    },

    /// The listening socket could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// Address we tried to bind.
        addr: SocketAddr,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The server stopped with an IO error.
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),

    /// Prometheus exporter could not be installed.
    #[error("metrics exporter error: {0}")]
    Metrics(String),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServerError>;
