//! Data transfer objects for HTTP message serialization.

use serde::Serialize;

/// Message returned by the root route.
pub const WELCOME_MESSAGE: &str =
    "Welcome to the Iris Prediction API! Use /predict to get predictions.";

/// Message attached to every failed prediction.
pub const PREDICTION_FAILED_MESSAGE: &str = "Prediction failed. Please check input data.";

/// Response body for `GET /`.
#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

/// Response body for `POST /predict`.
///
/// Both variants are sent with status 200.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PredictResponse {
    Prediction {
        predicted_class: String,
    },
    Failure {
        error: String,
        message: String,
    },
}

impl PredictResponse {
    pub fn prediction(label: impl Into<String>) -> Self {
        Self::Prediction { predicted_class: label.into() }
    }

    pub fn failure(error: impl ToString) -> Self {
        Self::Failure {
            error: error.to_string(),
            message: PREDICTION_FAILED_MESSAGE.into(),
        }
    }
}
