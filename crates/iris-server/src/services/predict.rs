//! Prediction service: runs the model and maps its output to a response body.

use iris_core::{class_label, FeatureRecord};
use iris_model::Model;
use tracing::{debug, warn};

use crate::dto::PredictResponse;

/// Classifies one record.
///
/// Inference errors are folded into [`PredictResponse::Failure`] so the
/// caller always gets a 200 body.
pub fn classify(model: &Model, record: &FeatureRecord) -> PredictResponse {
    match model.predict(record) {
        Ok(class) => {
            let label = class_label(class);
            debug!("Predicted class {} ({}) for {:?}", class, label, record);
            PredictResponse::prediction(label)
        }
        Err(e) => {
            warn!("Prediction failed for {:?}: {}", record, e);
            PredictResponse::failure(e)
        }
    }
}
