pub mod estimator;
pub mod model;
pub mod models;

pub use estimator::{EstimateError, SalaryEstimator, predict};
pub use model::{FeatureColumn, FeatureRow, ModelConfig, ModelError, ModelRegistry, SalaryModel};
pub use models::*;
