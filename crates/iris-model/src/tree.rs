//! Flattened binary decision tree.

use iris_core::{ClassIndex, FEATURE_COUNT};
use serde::{Deserialize, Serialize};

use crate::error::{InferenceError, ModelError};
use crate::Classifier;

/// A single tree node, stored in a flat array with the root at index 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    /// Goes to `left` when `row[feature] <= threshold`, otherwise to `right`.
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    /// Terminal node carrying the predicted class index.
    Leaf { class: ClassIndex },
}

/// A decision tree classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    nodes: Vec<Node>,
}

impl DecisionTree {
    /// Builds a tree from its flattened nodes, validating the structure.
    pub fn new(nodes: Vec<Node>) -> Result<Self, ModelError> {
        let tree = Self { nodes };
        tree.validate()?;
        Ok(tree)
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Checks that every split refers to a known feature and that children
    /// come strictly after their parent, which rules out cycles.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.nodes.is_empty() {
            return Err(ModelError::invalid("decision tree has no nodes"));
        }

        for (idx, node) in self.nodes.iter().enumerate() {
            let Node::Split { feature, threshold, left, right } = *node else {
                continue;
            };
            if feature >= FEATURE_COUNT {
                return Err(ModelError::invalid(format!(
                    "node {} splits on feature {}, but only {} features exist",
                    idx, feature, FEATURE_COUNT
                )));
            }
            if threshold.is_nan() {
                return Err(ModelError::invalid(format!("node {} has a NaN threshold", idx)));
            }
            for child in [left, right] {
                if child <= idx || child >= self.nodes.len() {
                    return Err(ModelError::invalid(format!(
                        "node {} points to child {} outside ({}, {})",
                        idx,
                        child,
                        idx,
                        self.nodes.len()
                    )));
                }
            }
        }

        Ok(())
    }
}

impl Classifier for DecisionTree {
    fn predict_row(&self, row: &[f64; FEATURE_COUNT]) -> Result<ClassIndex, InferenceError> {
        let mut idx = 0;
        loop {
            match self.nodes.get(idx) {
                Some(Node::Leaf { class }) => return Ok(*class),
                Some(Node::Split { feature, threshold, left, right }) => {
                    let value = row
                        .get(*feature)
                        .ok_or(InferenceError::UnknownFeature { node: idx, feature: *feature })?;
                    let next = if *value <= *threshold { *left } else { *right };
                    if next <= idx {
                        return Err(InferenceError::MissingNode { node: next });
                    }
                    idx = next;
                }
                None => return Err(InferenceError::MissingNode { node: idx }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stump() -> DecisionTree {
        DecisionTree::new(vec![
            Node::Split { feature: 2, threshold: 2.45, left: 1, right: 2 },
            Node::Leaf { class: 0 },
            Node::Leaf { class: 1 },
        ])
        .unwrap()
    }

    #[test]
    fn threshold_is_inclusive_on_the_left() {
        let tree = stump();
        assert_eq!(tree.predict_row(&[0.0, 0.0, 2.45, 0.0]), Ok(0));
        assert_eq!(tree.predict_row(&[0.0, 0.0, 2.46, 0.0]), Ok(1));
    }

    #[test]
    fn single_leaf_tree_is_constant() {
        let tree = DecisionTree::new(vec![Node::Leaf { class: 2 }]).unwrap();
        assert_eq!(tree.predict_row(&[1.0, 2.0, 3.0, 4.0]), Ok(2));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn rejects_empty_tree() {
        let err = DecisionTree::new(Vec::new()).unwrap_err();
        assert!(matches!(err, ModelError::Invalid(_)));
    }

    #[test]
    fn rejects_unknown_feature() {
        let err = DecisionTree::new(vec![
            Node::Split { feature: 4, threshold: 1.0, left: 1, right: 2 },
            Node::Leaf { class: 0 },
            Node::Leaf { class: 1 },
        ])
        .unwrap_err();
        assert!(err.to_string().contains("feature 4"));
    }

    #[test]
    fn rejects_backward_and_dangling_children() {
        let backward = DecisionTree::new(vec![
            Node::Leaf { class: 0 },
            Node::Split { feature: 0, threshold: 1.0, left: 0, right: 2 },
            Node::Leaf { class: 1 },
        ]);
        assert!(backward.is_err());

        let dangling = DecisionTree::new(vec![
            Node::Split { feature: 0, threshold: 1.0, left: 1, right: 5 },
            Node::Leaf { class: 0 },
        ]);
        assert!(dangling.is_err());
    }

    #[test]
    fn unvalidated_tree_reports_missing_node() {
        let tree: DecisionTree = serde_json::from_str(
            r#"{"nodes": [{"split": {"feature": 0, "threshold": 1.0, "left": 1, "right": 9}}, {"leaf": {"class": 0}}]}"#,
        )
        .unwrap();
        assert_eq!(
            tree.predict_row(&[5.0, 0.0, 0.0, 0.0]),
            Err(InferenceError::MissingNode { node: 9 })
        );
    }
}
