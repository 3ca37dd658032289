//! Flattened binary decision tree.

use cardio_core::{Classifier, FeatureVector, PredictionError, FEATURE_COUNT};
use serde::{Deserialize, Serialize};

/// A tree node. Children are indices into [`DecisionTree::nodes`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf(i64),
}

/// Decision tree with its root at index 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

impl Classifier for DecisionTree {
    fn predict(&self, features: &FeatureVector) -> Result<i64, PredictionError> {
        let x = features.as_f64();
        let mut index = 0;
        // a well-formed tree visits each node at most once
        for _ in 0..self.nodes.len() {
            let node = self.nodes.get(index).ok_or_else(|| {
                PredictionError::InvalidModel(format!("node index {} out of range", index))
            })?;
            match *node {
                TreeNode::Leaf(label) => return Ok(label),
                TreeNode::Split { feature, threshold, left, right } => {
                    if feature >= FEATURE_COUNT {
                        return Err(PredictionError::ShapeMismatch {
                            expected: feature.saturating_add(1),
                            actual: FEATURE_COUNT,
                        });
                    }
                    index = if x[feature] <= threshold { left } else { right };
                }
            }
        }
        Err(PredictionError::InvalidModel(
            "tree walk did not reach a leaf".into(),
        ))
    }
}
