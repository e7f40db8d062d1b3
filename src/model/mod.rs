//! Regression model inference.
//!
//! Loads the serialized gradient-boosted tree ensemble and the ordered
//! feature-name list it was trained with, then answers pure `predict`
//! calls. The adapter never reorders features — callers own ordering.
//!
//! Artifact format: the trained model is exported to JSON as
//! `base_prediction + learning_rate * Σ tree(x)`, each tree a flat node
//! array walked from index 0.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Errors from model loading and inference.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("failed to read model artifact {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to parse model artifact {0}: {1}")]
    Parse(PathBuf, #[source] serde_json::Error),

    #[error("feature order artifact lists {order_len} features but the model expects {n_features}")]
    FeatureCountMismatch { order_len: usize, n_features: usize },

    #[error("feature vector has {got} values but the model expects {expected}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("feature {index} is not a finite number")]
    NonFiniteFeature { index: usize },

    #[error("tree {tree} is malformed: {message}")]
    MalformedTree { tree: usize, message: String },
}

/// One node of a regression tree: either an internal split or a leaf.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        /// Index into the feature vector
        feature: usize,
        /// Go left when `x[feature] <= threshold`
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

/// A single regression tree stored as a flat node array, root at index 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressionTree {
    pub nodes: Vec<TreeNode>,
}

impl RegressionTree {
    /// Walk the tree for one feature vector.
    ///
    /// The step budget (one step per node) turns a cyclic or truncated
    /// node array into an error instead of an infinite loop.
    fn evaluate(&self, features: &[f64], tree_index: usize) -> Result<f64, ModelError> {
        if self.nodes.is_empty() {
            return Err(ModelError::MalformedTree {
                tree: tree_index,
                message: "empty node array".to_string(),
            });
        }

        let mut node_idx = 0;
        for _ in 0..self.nodes.len() {
            match &self.nodes[node_idx] {
                TreeNode::Leaf { value } => return Ok(*value),
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let value =
                        features
                            .get(*feature)
                            .copied()
                            .ok_or(ModelError::MalformedTree {
                                tree: tree_index,
                                message: format!("split references feature {feature}"),
                            })?;
                    node_idx = if value <= *threshold { *left } else { *right };
                    if node_idx >= self.nodes.len() {
                        return Err(ModelError::MalformedTree {
                            tree: tree_index,
                            message: format!("child index {node_idx} out of range"),
                        });
                    }
                }
            }
        }

        Err(ModelError::MalformedTree {
            tree: tree_index,
            message: "walk exceeded node count (cycle?)".to_string(),
        })
    }
}

/// Gradient-boosted tree ensemble for output-rate regression.
///
/// A model with zero trees is a constant predictor returning
/// `base_prediction` — useful as a stub in tests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradientBoostingModel {
    /// Number of features each prediction row must carry
    pub n_features: usize,
    /// Ensemble intercept (the training-set mean for least-squares loss)
    pub base_prediction: f64,
    /// Shrinkage applied to every tree's contribution
    pub learning_rate: f64,
    pub trees: Vec<RegressionTree>,
}

impl GradientBoostingModel {
    /// Constant predictor with no trees. Predicts `value` for any row of
    /// `n_features` inputs.
    pub fn constant(value: f64, n_features: usize) -> Self {
        Self {
            n_features,
            base_prediction: value,
            learning_rate: 1.0,
            trees: Vec::new(),
        }
    }

    /// Predict the output rate for one feature row.
    ///
    /// Pure — no side effects, no caching. Values must already be in the
    /// model's training order.
    pub fn predict(&self, features: &[f64]) -> Result<f64, ModelError> {
        if features.len() != self.n_features {
            return Err(ModelError::DimensionMismatch {
                expected: self.n_features,
                got: features.len(),
            });
        }
        if let Some(index) = features.iter().position(|v| !v.is_finite()) {
            return Err(ModelError::NonFiniteFeature { index });
        }

        let mut sum = self.base_prediction;
        for (i, tree) in self.trees.iter().enumerate() {
            sum += self.learning_rate * tree.evaluate(features, i)?;
        }
        Ok(sum)
    }
}

/// The model plus its declared feature ordering, loaded together at startup.
#[derive(Debug, Clone)]
pub struct ModelArtifacts {
    pub model: GradientBoostingModel,
    /// Feature names in the exact order the model was trained with.
    /// Consumed only for feature-vector assembly — never validated against
    /// the model's internal expectations beyond the count check at load.
    pub feature_order: Vec<String>,
}

impl ModelArtifacts {
    /// Load both artifacts from disk. Any failure here is fatal at startup.
    pub fn load(model_path: &Path, features_path: &Path) -> Result<Self, ModelError> {
        let model_raw = std::fs::read_to_string(model_path)
            .map_err(|e| ModelError::Io(model_path.to_path_buf(), e))?;
        let model: GradientBoostingModel = serde_json::from_str(&model_raw)
            .map_err(|e| ModelError::Parse(model_path.to_path_buf(), e))?;

        let features_raw = std::fs::read_to_string(features_path)
            .map_err(|e| ModelError::Io(features_path.to_path_buf(), e))?;
        let feature_order: Vec<String> = serde_json::from_str(&features_raw)
            .map_err(|e| ModelError::Parse(features_path.to_path_buf(), e))?;

        let artifacts = Self::from_parts(model, feature_order)?;
        tracing::info!(
            model = %model_path.display(),
            trees = artifacts.model.trees.len(),
            features = artifacts.feature_order.len(),
            "Loaded regression model artifacts"
        );
        Ok(artifacts)
    }

    /// Assemble from already-deserialized parts, checking the feature count.
    pub fn from_parts(
        model: GradientBoostingModel,
        feature_order: Vec<String>,
    ) -> Result<Self, ModelError> {
        if feature_order.len() != model.n_features {
            return Err(ModelError::FeatureCountMismatch {
                order_len: feature_order.len(),
                n_features: model.n_features,
            });
        }
        Ok(Self {
            model,
            feature_order,
        })
    }
}
