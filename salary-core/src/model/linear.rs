//! Linear regression artifacts: `intercept + Σ coefficient × feature`.

use std::io::Read;

use serde::Deserialize;
use tracing::debug;

use super::{
    ColumnEncoder, FeatureRow, ModelConfig, ModelError, ModelLoader, RowEncoder, SalaryModel,
    factory::open_artifact,
};

pub const FORMAT_NAME: &str = "linear";

#[derive(Debug, Deserialize)]
struct LinearArtifact {
    encoding: Vec<ColumnEncoder>,
    intercept: f64,
    coefficients: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct LinearModel {
    encoder: RowEncoder,
    intercept: f64,
    coefficients: Vec<f64>,
}

impl LinearModel {
    pub fn new(
        encoder: RowEncoder,
        intercept: f64,
        coefficients: Vec<f64>,
    ) -> Result<Self, ModelError> {
        if coefficients.len() != encoder.width() {
            return Err(ModelError::Schema(format!(
                "expected {} coefficients, found {}",
                encoder.width(),
                coefficients.len()
            )));
        }
        if !intercept.is_finite() || coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ModelError::Schema(
                "linear model weights must be finite".to_string(),
            ));
        }
        Ok(Self {
            encoder,
            intercept,
            coefficients,
        })
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ModelError> {
        let artifact: LinearArtifact = serde_json::from_reader(reader)?;
        Self::new(
            RowEncoder::new(artifact.encoding)?,
            artifact.intercept,
            artifact.coefficients,
        )
    }

    fn predict_row(
        &self,
        row: &FeatureRow,
    ) -> Result<f64, ModelError> {
        let features = self.encoder.encode(row)?;
        let weighted: f64 = features
            .iter()
            .zip(&self.coefficients)
            .map(|(x, w)| x * w)
            .sum();
        Ok(self.intercept + weighted)
    }
}

impl SalaryModel for LinearModel {
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

pub struct LinearLoader;

impl ModelLoader for LinearLoader {
    fn format_name(&self) -> &'static str {
        FORMAT_NAME
    }

    fn load(
        &self,
        config: &ModelConfig,
    ) -> Result<Box<dyn SalaryModel>, ModelError> {
        let model = LinearModel::from_reader(open_artifact(&config.path)?)?;
        debug!(path = %config.path.display(), "loaded linear model");
        Ok(Box::new(model))
    }
}
