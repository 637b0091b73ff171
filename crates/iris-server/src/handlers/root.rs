//! Root informational endpoint.

use axum::Json;

use crate::dto::{WelcomeResponse, WELCOME_MESSAGE};

/// Returns the static welcome payload.
pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse { message: WELCOME_MESSAGE })
}
