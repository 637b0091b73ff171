//! Core domain types for the Iris prediction service.
//!
//! - [`FeatureRecord`] — The four measurements describing one flower sample
//! - [`Species`] — Known class labels and their class indices
//! - [`class_label`] — Resolves a raw class index to its label, falling back to `"Unknown"`
//!
//! # Example
//!
//! ```rust
//! use iris_core::{class_label, FeatureRecord};
//!
//! let record: FeatureRecord = serde_json::from_str(
//!     r#"{"sepal_length": 5.1, "sepal_width": "3.5", "petal_length": 1.4, "petal_width": 0.2}"#,
//! ).unwrap();
//!
//! assert_eq!(record.to_row(), [5.1, 3.5, 1.4, 0.2]);
//! assert_eq!(class_label(0), "setosa");
//! assert_eq!(class_label(7), "Unknown");
//! ```

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

/// Raw integer output of a classifier.
pub type ClassIndex = i64;

/// Number of input features the model was trained on.
pub const FEATURE_COUNT: usize = 4;

/// Feature names in training column order.
///
/// The model has no named-feature introspection, so every row handed to it
/// must follow this order.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] =
    ["sepal_length", "sepal_width", "petal_length", "petal_width"];

/// Label returned for class indices outside the known mapping.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// One flower sample submitted for prediction.
///
/// Each field accepts a JSON number, a string holding a number, or a boolean
/// (`true` is `1.0`).
/// No range checks are applied.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct FeatureRecord {
    #[serde(deserialize_with = "coerce_f64")]
    pub sepal_length: f64,
    #[serde(deserialize_with = "coerce_f64")]
    pub sepal_width: f64,
    #[serde(deserialize_with = "coerce_f64")]
    pub petal_length: f64,
    #[serde(deserialize_with = "coerce_f64")]
    pub petal_width: f64,
}

impl FeatureRecord {
    /// Creates a record from measurements in training column order.
    pub fn new(sepal_length: f64, sepal_width: f64, petal_length: f64, petal_width: f64) -> Self {
        Self { sepal_length, sepal_width, petal_length, petal_width }
    }

    /// Returns the single model input row, ordered as [`FEATURE_NAMES`].
    pub fn to_row(&self) -> [f64; FEATURE_COUNT] {
        [self.sepal_length, self.sepal_width, self.petal_length, self.petal_width]
    }
}

fn coerce_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LaxFloatVisitor)
}

/// Accepts numbers, numeric strings and booleans as `f64`.
///
/// Syntax and EOF errors come from the deserializer itself and pass through untouched.
struct LaxFloatVisitor;

impl<'de> Visitor<'de> for LaxFloatVisitor {
    type Value = f64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a valid number")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<f64, E> {
        Ok(if v { 1.0 } else { 0.0 })
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
        v.trim()
            .parse()
            .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

/// Iris species known to the class-index mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    Setosa,
    Versicolor,
    Virginica,
}

impl Species {
    /// Maps a class index to a species, if it is one of `0`, `1`, `2`.
    pub fn from_class_index(index: ClassIndex) -> Option<Self> {
        match index {
            0 => Some(Self::Setosa),
            1 => Some(Self::Versicolor),
            2 => Some(Self::Virginica),
            _ => None,
        }
    }

    /// Returns the lowercase label used in responses.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Setosa => "setosa",
            Self::Versicolor => "versicolor",
            Self::Virginica => "virginica",
        }
    }
}

/// Resolves a class index to its label, or [`UNKNOWN_LABEL`] when unmapped.
pub fn class_label(index: ClassIndex) -> &'static str {
    Species::from_class_index(index).map_or(UNKNOWN_LABEL, Species::as_str)
}
