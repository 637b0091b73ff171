//! HTTP route handlers for the prediction server.

pub mod predict;
pub mod root;

/// Health check endpoint.
pub async fn health() -> &'static str {
    "OK"
}
