//! Random forest regressor artifacts.
//!
//! ```json
//! {
//!   "encoding": [{"kind": "numeric", "column": "Age"}, ...],
//!   "trees": [
//!     {"nodes": [
//!       {"feature": 9, "threshold": 7.5, "left": 1, "right": 2},
//!       {"value": 62000.0},
//!       {"value": 98000.0}
//!     ]}
//!   ]
//! }
//! ```
//!
//! Node 0 is the root of each tree. A split sends the row left when
//! `features[feature] <= threshold`. The forest prediction is the mean of
//! the leaf values reached in every tree.

use std::io::Read;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    ColumnEncoder, FeatureRow, ModelConfig, ModelError, ModelLoader, RowEncoder, SalaryModel,
    factory::open_artifact,
};

pub const FORMAT_NAME: &str = "random_forest";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    pub nodes: Vec<TreeNode>,
}

impl Tree {
    /// Checks that the tree is non-empty, that every split reads an existing
    /// feature, and that children always sit after their parent. The last
    /// rule rules out cycles, so [`Tree::evaluate`] always reaches a leaf.
    fn validate(
        &self,
        index: usize,
        width: usize,
    ) -> Result<(), ModelError> {
        if self.nodes.is_empty() {
            return Err(ModelError::Schema(format!("tree {index} has no nodes")));
        }

        for (position, node) in self.nodes.iter().enumerate() {
            match *node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if feature >= width {
                        return Err(ModelError::Schema(format!(
                            "tree {index} node {position} reads feature {feature}, \
                             but rows encode only {width}"
                        )));
                    }
                    if !threshold.is_finite() {
                        return Err(ModelError::Schema(format!(
                            "tree {index} node {position} has a non-finite threshold"
                        )));
                    }
                    for child in [left, right] {
                        if child <= position || child >= self.nodes.len() {
                            return Err(ModelError::Schema(format!(
                                "tree {index} node {position} has invalid child {child}"
                            )));
                        }
                    }
                }
                TreeNode::Leaf { value } if !value.is_finite() => {
                    return Err(ModelError::Schema(format!(
                        "tree {index} node {position} has a non-finite leaf value"
                    )));
                }
                TreeNode::Leaf { .. } => {}
            }
        }

        Ok(())
    }

    fn evaluate(
        &self,
        features: &[f64],
    ) -> f64 {
        let mut index = 0;
        loop {
            match self.nodes[index] {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    index = if features[feature] <= threshold {
                        left
                    } else {
                        right
                    };
                }
                TreeNode::Leaf { value } => return value,
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct ForestArtifact {
    encoding: Vec<ColumnEncoder>,
    trees: Vec<Tree>,
}

/// An ensemble of regression trees over one-hot encoded rows.
#[derive(Debug, Clone)]
pub struct RandomForestModel {
    encoder: RowEncoder,
    trees: Vec<Tree>,
}

impl RandomForestModel {
    /// Builds a forest after validating the encoder and every tree.
    pub fn new(
        encoder: RowEncoder,
        trees: Vec<Tree>,
    ) -> Result<Self, ModelError> {
        if trees.is_empty() {
            return Err(ModelError::Schema("forest has no trees".to_string()));
        }
        for (index, tree) in trees.iter().enumerate() {
            tree.validate(index, encoder.width())?;
        }
        Ok(Self { encoder, trees })
    }

    /// Parses a JSON artifact.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ModelError> {
        let artifact: ForestArtifact = serde_json::from_reader(reader)?;
        Self::new(RowEncoder::new(artifact.encoding)?, artifact.trees)
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }

    fn predict_row(
        &self,
        row: &FeatureRow,
    ) -> Result<f64, ModelError> {
        let features = self.encoder.encode(row)?;
        let total: f64 = self.trees.iter().map(|tree| tree.evaluate(&features)).sum();
        Ok(total / self.trees.len() as f64)
    }
}

impl SalaryModel for RandomForestModel {
    fn kind(&self) -> &'static str {
        FORMAT_NAME
    }

    fn predict(
        &self,
        rows: &[FeatureRow],
    ) -> Result<Vec<f64>, ModelError> {
        rows.iter().map(|row| self.predict_row(row)).collect()
    }
}

/// Loads [`RandomForestModel`] artifacts from disk.
pub struct RandomForestLoader;

impl ModelLoader for RandomForestLoader {
    fn format_name(&self) -> &'static str {
        FORMAT_NAME
    }

    fn load(
        &self,
        config: &ModelConfig,
    ) -> Result<Box<dyn SalaryModel>, ModelError> {
        let model = RandomForestModel::from_reader(open_artifact(&config.path)?)?;
        debug!(
            path = %config.path.display(),
            trees = model.tree_count(),
            "loaded random forest"
        );
        Ok(Box::new(model))
    }
}
