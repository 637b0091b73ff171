//! Majority-vote ensemble of decision trees.

use std::collections::BTreeMap;

use iris_core::{ClassIndex, FEATURE_COUNT};
use serde::{Deserialize, Serialize};

use crate::error::{InferenceError, ModelError};
use crate::tree::DecisionTree;
use crate::Classifier;

/// A random forest classifier.
///
/// Each tree casts one vote; the class with the most votes wins and ties go
/// to the lowest class index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomForest {
    trees: Vec<DecisionTree>,
}

impl RandomForest {
    /// Builds a forest, validating every member tree.
    pub fn new(trees: Vec<DecisionTree>) -> Result<Self, ModelError> {
        let forest = Self { trees };
        forest.validate()?;
        Ok(forest)
    }

    /// Number of trees in the ensemble.
    pub fn len(&self) -> usize {
        self.trees.len()
    }

    /// Returns `true` if the forest has no trees.
    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if self.trees.is_empty() {
            return Err(ModelError::invalid("random forest has no trees"));
        }
        for (idx, tree) in self.trees.iter().enumerate() {
            tree.validate()
                .map_err(|e| ModelError::invalid(format!("tree {}: {}", idx, e)))?;
        }
        Ok(())
    }
}

impl Classifier for RandomForest {
    fn predict_row(&self, row: &[f64; FEATURE_COUNT]) -> Result<ClassIndex, InferenceError> {
        let mut votes: BTreeMap<ClassIndex, usize> = BTreeMap::new();
        for tree in &self.trees {
            *votes.entry(tree.predict_row(row)?).or_default() += 1;
        }

        // BTreeMap iterates in ascending class order, so a strict `>` keeps the lowest tied class.
        let mut winner: Option<(ClassIndex, usize)> = None;
        for (class, count) in votes {
            if winner.map_or(true, |(_, best)| count > best) {
                winner = Some((class, count));
            }
        }

        winner.map(|(class, _)| class).ok_or(InferenceError::EmptyEnsemble)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Node;

    fn constant(class: ClassIndex) -> DecisionTree {
        DecisionTree::new(vec![Node::Leaf { class }]).unwrap()
    }

    #[test]
    fn majority_wins() {
        let forest = RandomForest::new(vec![constant(2), constant(1), constant(2)]).unwrap();
        assert_eq!(forest.predict_row(&[0.0; FEATURE_COUNT]), Ok(2));
    }

    #[test]
    fn ties_go_to_lowest_class() {
        let forest = RandomForest::new(vec![constant(2), constant(1)]).unwrap();
        assert_eq!(forest.predict_row(&[0.0; FEATURE_COUNT]), Ok(1));
    }

    #[test]
    fn rejects_empty_forest() {
        assert!(RandomForest::new(Vec::new()).is_err());
    }

    #[test]
    fn unvalidated_empty_forest_fails_inference() {
        let forest: RandomForest = serde_json::from_str(r#"{"trees": []}"#).unwrap();
        assert_eq!(
            forest.predict_row(&[0.0; FEATURE_COUNT]),
            Err(InferenceError::EmptyEnsemble)
        );
    }

    #[test]
    fn reports_invalid_member_tree() {
        let bad: DecisionTree = serde_json::from_str(r#"{"nodes": []}"#).unwrap();
        let err = RandomForest::new(vec![constant(0), bad]).unwrap_err();
        assert!(err.to_string().contains("tree 1"));
    }
}
