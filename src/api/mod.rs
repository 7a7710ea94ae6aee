//! HTTP API module: CORS middleware, routes, and JSON handlers.

pub mod cors;
pub mod handlers;
pub mod path;
pub mod query;
pub mod routes;

pub use query::{query_or_default, QueryMap};
pub use routes::{app, create_router};
