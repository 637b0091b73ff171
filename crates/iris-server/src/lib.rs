//! HTTP server exposing the Iris classifier.
//!
//! Routes:
//!
//! | Method | Path       | Handler |
//! |--------|------------|---------|
//! | GET    | `/`        | [`handlers::root::root`] |
//! | POST   | `/predict` | [`handlers::predict::predict`] |
//! | GET    | `/health`  | [`handlers::health`] |

pub mod config;
pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod services;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::routing::{get, post};
use axum::Router;
use iris_model::{Model, ModelError};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared server state accessible from all handlers.
///
/// Built once at startup and never mutated, so handlers read it without locking.
#[derive(Debug)]
pub struct ServerState {
    pub model: Model,
}

impl ServerState {
    pub fn new(model: Model) -> Self {
        Self { model }
    }

    /// Loads the model artifact from `path`.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let model = Model::load(path)?;
        info!("Model loaded successfully from {} ({})", path.display(), model);
        Ok(Self::new(model))
    }
}

/// Builds the application router.
pub fn app(state: Arc<ServerState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
                version = ?req.version(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    let logged_routes = Router::new()
        .route("/", get(handlers::root::root))
        .route("/predict", post(handlers::predict::predict))
        .layer(trace_layer);

    Router::new()
        .merge(logged_routes)
        .route("/health", get(handlers::health))
        .layer(cors)
        .with_state(state)
}
