//! The estimator facade: one request in, one [`SalaryEstimate`] out.
//!
//! # Example
//!
//! ```
//! use salary_core::{
//!     EducationLevel, FeatureRow, Gender, JobTitle, ModelError, PredictionRequest, SalaryModel,
//!     predict,
//! };
//!
//! struct Flat(f64);
//!
//! impl SalaryModel for Flat {
//!     fn kind(&self) -> &'static str {
//!         "flat"
//!     }
//!     fn predict(&self, rows: &[FeatureRow]) -> Result<Vec<f64>, ModelError> {
//!         Ok(vec![self.0; rows.len()])
//!     }
//! }
//!
//! let request = PredictionRequest {
//!     age: 30,
//!     gender: Gender::Male,
//!     education_level: EducationLevel::Bachelors,
//!     job_title: JobTitle::SoftwareEngineer,
//!     years_experience: 5,
//! };
//!
//! let estimate = predict(&request, &Flat(75000.0)).unwrap();
//!
//! assert_eq!(estimate.p25, 60000.0);
//! assert_eq!(estimate.p75, 90000.0);
//! ```

use thiserror::Error;
use tracing::{debug, warn};

use crate::model::{FeatureRow, ModelConfig, ModelError, ModelRegistry, SalaryModel};
use crate::models::{PredictionRequest, SalaryEstimate};

#[derive(Debug, Error)]
pub enum EstimateError {
    /// The model artifact could not be loaded. Fatal at startup.
    #[error("salary model unavailable: {0}")]
    ModelUnavailable(#[source] ModelError),

    /// The model rejected the row or produced an unusable value.
    #[error("salary prediction failed: {0}")]
    Inference(#[source] ModelError),
}

/// Runs one prediction against `model`.
///
/// Builds a single [`FeatureRow`] from `request`, runs it through the model
/// as a one-row batch and derives the display percentiles from the result.
///
/// # Errors
///
/// [`EstimateError::Inference`] when the model rejects the row, returns
/// anything other than exactly one value, or returns a value that is negative
/// or not finite.
pub fn predict<M>(
    request: &PredictionRequest,
    model: &M,
) -> Result<SalaryEstimate, EstimateError>
where
    M: SalaryModel + ?Sized,
{
    debug_assert!(
        request.is_within_domain(),
        "request outside slider bounds: {request:?}"
    );
    let row = FeatureRow::from(request);
    debug!(?row, model = model.kind(), "running salary inference");

    let outputs = model.predict(&[row]).map_err(|e| {
        warn!(error = %e, "model rejected prediction row");
        EstimateError::Inference(e)
    })?;

    let predicted = match outputs.as_slice() {
        [value] => *value,
        _ => {
            return Err(EstimateError::Inference(ModelError::OutputLength {
                expected: 1,
                actual: outputs.len(),
            }));
        }
    };

    if !predicted.is_finite() || predicted < 0.0 {
        warn!(predicted, "model produced an invalid salary");
        return Err(EstimateError::Inference(ModelError::InvalidOutput(
            predicted,
        )));
    }

    Ok(SalaryEstimate::from_prediction(predicted))
}

/// A loaded model bound to the facade.
///
/// The model is read once in [`SalaryEstimator::load`] and shared read-only
/// for every later [`SalaryEstimator::estimate`] call.
pub struct SalaryEstimator {
    model: Box<dyn SalaryModel>,
}

impl SalaryEstimator {
    pub fn new(model: Box<dyn SalaryModel>) -> Self {
        Self { model }
    }

    /// Loads the configured artifact.
    ///
    /// # Errors
    ///
    /// [`EstimateError::ModelUnavailable`] for any load failure: unknown
    /// format, missing file, malformed or inconsistent artifact.
    pub fn load(
        registry: &ModelRegistry,
        config: &ModelConfig,
    ) -> Result<Self, EstimateError> {
        let model = registry
            .load(config)
            .map_err(EstimateError::ModelUnavailable)?;
        debug!(format = model.kind(), path = %config.path.display(), "salary model ready");
        Ok(Self::new(model))
    }

    pub fn model(&self) -> &dyn SalaryModel {
        self.model.as_ref()
    }

    pub fn estimate(
        &self,
        request: &PredictionRequest,
    ) -> Result<SalaryEstimate, EstimateError> {
        predict(request, self.model.as_ref())
    }
}
