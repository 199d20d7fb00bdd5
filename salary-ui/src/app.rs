//! Application state: the form, the loaded estimator and the outcome of the
//! last predict action.

use salary_core::{EstimateError, SalaryEstimate, SalaryEstimator};
use tracing::{error, info};

use crate::form::PredictionForm;
use crate::utils::format_currency;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Info,
    Success,
    Error,
}

pub struct SalaryApp {
    pub form: PredictionForm,
    estimator: SalaryEstimator,
    /// Last successful estimate. Cleared when a prediction fails.
    pub result: Option<SalaryEstimate>,
    pub status_message: Option<(String, MessageType)>,
}

impl SalaryApp {
    pub fn new(estimator: SalaryEstimator) -> Self {
        Self {
            form: PredictionForm::new(),
            estimator,
            result: None,
            status_message: None,
        }
    }

    pub fn estimator(&self) -> &SalaryEstimator {
        &self.estimator
    }

    pub fn show_message(
        &mut self,
        msg: impl Into<String>,
        msg_type: MessageType,
    ) {
        self.status_message = Some((msg.into(), msg_type));
    }

    /// Handles the "Predict Salary" action.
    ///
    /// Builds a fresh request from the form and runs it through the estimator.
    /// Either the full estimate is stored or nothing is: a failed prediction
    /// clears any earlier result.
    pub fn on_predict(&mut self) -> Result<SalaryEstimate, EstimateError> {
        let request = self.form.to_request();

        match self.estimator.estimate(&request) {
            Ok(estimate) => {
                info!(predicted = estimate.predicted, "salary predicted");
                self.result = Some(estimate);
                self.show_message(
                    format!("Predicted Salary: {}", format_currency(estimate.predicted)),
                    MessageType::Success,
                );
                Ok(estimate)
            }
            Err(e) => {
                error!(error = %e, "salary prediction failed");
                self.result = None;
                self.show_message(format!("Prediction failed: {e}"), MessageType::Error);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use salary_core::{FeatureColumn, FeatureRow, JobTitle, ModelError, SalaryModel};

    use super::*;

    /// Pays everyone the same, but has never seen a Director.
    struct FlatModel;

    impl SalaryModel for FlatModel {
        fn kind(&self) -> &'static str {
            "flat"
        }
        fn predict(
            &self,
            rows: &[FeatureRow],
        ) -> Result<Vec<f64>, ModelError> {
            rows.iter()
                .map(|row| {
                    if row.job_title == JobTitle::Director {
                        Err(ModelError::UnknownCategory {
                            column: FeatureColumn::JobTitle,
                            value: row.job_title.to_string(),
                        })
                    } else {
                        Ok(75000.0)
                    }
                })
                .collect()
        }
    }

    fn app() -> SalaryApp {
        SalaryApp::new(SalaryEstimator::new(Box::new(FlatModel)))
    }

    #[test]
    fn new_app_has_no_result_or_message() {
        let app = app();

        assert!(app.result.is_none());
        assert!(app.status_message.is_none());
        assert_eq!(app.estimator().model().kind(), "flat");
    }

    #[test]
    fn on_predict_stores_estimate_and_success_message() {
        let mut app = app();

        let estimate = app.on_predict().unwrap();

        assert_eq!(app.result, Some(estimate));
        assert_eq!(estimate.p25, 60000.0);
        assert_eq!(
            app.status_message,
            Some((
                "Predicted Salary: $75,000.00".to_string(),
                MessageType::Success
            ))
        );
    }

    #[test]
    fn failed_prediction_clears_previous_result() {
        let mut app = app();
        app.on_predict().unwrap();

        app.form.job_title.select(JobTitle::Director).unwrap();
        let err = app.on_predict().unwrap_err();

        assert!(matches!(err, EstimateError::Inference(_)));
        assert!(app.result.is_none());
        let (msg, kind) = app.status_message.clone().unwrap();
        assert_eq!(kind, MessageType::Error);
        assert!(msg.starts_with("Prediction failed:"), "{msg}");
        assert!(msg.contains("Director"), "{msg}");
    }
}
