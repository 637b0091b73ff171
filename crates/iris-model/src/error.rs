//! Error types for artifact loading and inference.

/// Errors raised while loading a model artifact. All of them are fatal at startup.
#[derive(thiserror::Error, Debug)]
pub enum ModelError {
    /// The artifact file does not exist.
    #[error("Model file not found at {path}")]
    NotFound { path: String },

    /// The artifact file exists but could not be read.
    #[error("Failed to read model file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The artifact is not valid JSON or does not match the artifact schema.
    #[error("Failed to decode model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    /// The artifact was trained on a different column order.
    #[error("Model expects features {found:?}, but requests provide {expected:?}")]
    FeatureOrder {
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// The artifact decoded but its structure is unusable.
    #[error("Invalid model artifact: {0}")]
    Invalid(String),
}

impl ModelError {
    /// Creates an I/O error with path context, mapping a missing file to [`ModelError::NotFound`].
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }

    /// Creates a structural validation error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}

/// Errors raised while running a single prediction.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum InferenceError {
    /// An input value is NaN or infinite.
    #[error("Input feature '{feature}' must be a finite number, got {value}")]
    NonFiniteFeature { feature: &'static str, value: f64 },

    /// Tree traversal reached a node that does not exist.
    #[error("Tree traversal reached missing node {node}")]
    MissingNode { node: usize },

    /// A split refers to a feature column the row does not have.
    #[error("Split at node {node} refers to unknown feature index {feature}")]
    UnknownFeature { node: usize, feature: usize },

    /// An ensemble has no members to vote.
    #[error("Ensemble contains no trees")]
    EmptyEnsemble,
}
