//! Minimal JSON HTTP API lab.
//!
//! A handful of GET endpoints behind a permissive CORS layer:
//!
//! ```text
//! GET /ping                 {"message":"pong","status":"healthy"}
//! GET /health               {"service":...,"status":"running","version":"1.0.0"}
//! GET /user/:id             echoes the path segment
//! GET /search?q=&limit=&page=
//! GET /user/:id/posts?category=&sort=
//! OPTIONS *                 204, no body
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: Router, CORS middleware and handlers
//! - [`metrics`]: Request metrics and Prometheus exporter
//! - [`server`]: Binding and serving
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod server;
pub mod utils;

pub use config::{Config, ServerMode};
pub use error::{ApiError, Result, ServerError};
