//! Model artifact schema and the loaded model handle.

use std::fmt;
use std::fs;
use std::path::Path;

use iris_core::{ClassIndex, FeatureRecord, FEATURE_COUNT, FEATURE_NAMES};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{InferenceError, ModelError};
use crate::forest::RandomForest;
use crate::tree::DecisionTree;
use crate::Classifier;

/// Estimator families an artifact may carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Estimator {
    DecisionTree(DecisionTree),
    RandomForest(RandomForest),
}

impl Estimator {
    fn validate(&self) -> Result<(), ModelError> {
        match self {
            Estimator::DecisionTree(tree) => tree.validate(),
            Estimator::RandomForest(forest) => forest.validate(),
        }
    }
}

impl Classifier for Estimator {
    fn predict_row(&self, row: &[f64; FEATURE_COUNT]) -> Result<ClassIndex, InferenceError> {
        match self {
            Estimator::DecisionTree(tree) => tree.predict_row(row),
            Estimator::RandomForest(forest) => forest.predict_row(row),
        }
    }
}

impl fmt::Display for Estimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Estimator::DecisionTree(tree) => write!(f, "decision_tree ({} nodes)", tree.len()),
            Estimator::RandomForest(forest) => write!(f, "random_forest ({} trees)", forest.len()),
        }
    }
}

/// On-disk artifact layout.
#[derive(Debug, Deserialize)]
struct Artifact {
    feature_names: Vec<String>,
    estimator: Estimator,
}

/// A loaded, validated classifier.
///
/// Immutable after construction; share it behind an `Arc` for concurrent reads.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    estimator: Estimator,
}

impl Model {
    /// Wraps an estimator after validating its structure.
    pub fn new(estimator: Estimator) -> Result<Self, ModelError> {
        estimator.validate()?;
        Ok(Self { estimator })
    }

    /// Loads and validates a model artifact from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| ModelError::io(path.display().to_string(), e))?;
        debug!("Read {} bytes of model artifact from {}", content.len(), path.display());
        Self::from_json(&content)
    }

    /// Parses and validates a model artifact from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let artifact: Artifact = serde_json::from_str(json)?;

        if artifact.feature_names != FEATURE_NAMES {
            return Err(ModelError::FeatureOrder {
                expected: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
                found: artifact.feature_names,
            });
        }

        Self::new(artifact.estimator)
    }

    /// Returns the underlying estimator.
    pub fn estimator(&self) -> &Estimator {
        &self.estimator
    }

    /// Predicts the class index for one feature record.
    ///
    /// Non-finite inputs are rejected before the estimator runs.
    pub fn predict(&self, record: &FeatureRecord) -> Result<ClassIndex, InferenceError> {
        let row = record.to_row();
        if let Some((feature, value)) = FEATURE_NAMES
            .iter()
            .zip(row)
            .find(|(_, value)| !value.is_finite())
        {
            return Err(InferenceError::NonFiniteFeature { feature: *feature, value });
        }
        self.estimator.predict_row(&row)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.estimator)
    }
}
