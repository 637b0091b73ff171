//! Prediction endpoint.

use std::sync::Arc;

use axum::{extract::State, Json};
use iris_core::FeatureRecord;

use crate::dto::PredictResponse;
use crate::extract::JsonBody;
use crate::services;
use crate::ServerState;

/// Classifies a single feature record.
///
/// Malformed payloads are rejected with a client error before inference runs.
pub async fn predict(
    State(state): State<Arc<ServerState>>,
    JsonBody(record): JsonBody<FeatureRecord>,
) -> Json<PredictResponse> {
    Json(services::predict::classify(&state.model, &record))
}
