//! Model artifact loading and inference for the Iris classifier.
//!
//! - [`Model`] — Validated classifier loaded once from a JSON artifact
//! - [`Estimator`] — Supported estimator families ([`DecisionTree`], [`RandomForest`])
//! - [`Classifier`] — Row-level prediction shared by every estimator
//! - [`ModelError`] and [`InferenceError`] — Load-time and per-request failures
//!
//! # Example
//!
//! ```rust
//! use iris_core::{class_label, FeatureRecord};
//! use iris_model::Model;
//!
//! let model = Model::from_json(r#"{
//!     "feature_names": ["sepal_length", "sepal_width", "petal_length", "petal_width"],
//!     "estimator": {
//!         "kind": "decision_tree",
//!         "nodes": [
//!             {"split": {"feature": 2, "threshold": 2.45, "left": 1, "right": 2}},
//!             {"leaf": {"class": 0}},
//!             {"leaf": {"class": 2}}
//!         ]
//!     }
//! }"#).unwrap();
//!
//! let class = model.predict(&FeatureRecord::new(5.1, 3.5, 1.4, 0.2)).unwrap();
//! assert_eq!(class_label(class), "setosa");
//! ```

pub mod error;
pub mod forest;
pub mod model;
pub mod tree;

pub use error::{InferenceError, ModelError};
pub use forest::RandomForest;
pub use model::{Estimator, Model};
pub use tree::{DecisionTree, Node};

use iris_core::{ClassIndex, FEATURE_COUNT};

/// Predicts a class index for one row in training column order.
pub trait Classifier {
    fn predict_row(&self, row: &[f64; FEATURE_COUNT]) -> Result<ClassIndex, InferenceError>;
}
