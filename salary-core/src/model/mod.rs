//! Predictive model seam and the artifact formats the estimator can load.
//!
//! A [`SalaryModel`] performs batch inference over [`FeatureRow`]s. Concrete
//! models are produced from on-disk artifacts by a [`ModelLoader`] registered
//! with a [`ModelRegistry`] under its format name.

pub mod encoding;
pub mod factory;
pub mod forest;
pub mod linear;

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{EducationLevel, Gender, JobTitle, PredictionRequest};

pub use encoding::{ColumnEncoder, RowEncoder};
pub use factory::{ModelConfig, ModelLoader, ModelRegistry};
pub use forest::{RandomForestLoader, RandomForestModel};
pub use linear::{LinearLoader, LinearModel};

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("cannot read model artifact '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid model artifact: {0}")]
    Schema(String),

    #[error("unknown model format '{format}'; available: {available:?}")]
    UnknownFormat {
        format: String,
        available: Vec<&'static str>,
    },

    #[error("column '{column}' has unseen category '{value}'")]
    UnknownCategory { column: FeatureColumn, value: String },

    #[error("model returned {actual} predictions for {expected} rows")]
    OutputLength { expected: usize, actual: usize },

    #[error("model returned an invalid salary: {0}")]
    InvalidOutput(f64),
}

/// Batch inference over fixed-schema rows.
///
/// Implementations must return exactly one prediction per input row, in
/// input order.
pub trait SalaryModel: Send + Sync {
    /// Artifact format this model was loaded from.
    fn kind(&self) -> &'static str;

    fn predict(
        &self,
        rows: &[FeatureRow],
    ) -> Result<Vec<f64>, ModelError>;
}

/// The input columns the model was trained on, in training order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureColumn {
    #[serde(rename = "Age")]
    Age,
    #[serde(rename = "Gender")]
    Gender,
    #[serde(rename = "Education Level")]
    EducationLevel,
    #[serde(rename = "Job Title")]
    JobTitle,
    #[serde(rename = "Years of Experience")]
    YearsOfExperience,
}

impl FeatureColumn {
    pub const ALL: [FeatureColumn; 5] = [
        FeatureColumn::Age,
        FeatureColumn::Gender,
        FeatureColumn::EducationLevel,
        FeatureColumn::JobTitle,
        FeatureColumn::YearsOfExperience,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Age => "Age",
            Self::Gender => "Gender",
            Self::EducationLevel => "Education Level",
            Self::JobTitle => "Job Title",
            Self::YearsOfExperience => "Years of Experience",
        }
    }

    pub fn is_categorical(&self) -> bool {
        matches!(self, Self::Gender | Self::EducationLevel | Self::JobTitle)
    }
}

impl fmt::Display for FeatureColumn {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single cell of a [`FeatureRow`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureValue {
    Numeric(f64),
    Category(&'static str),
}

/// One model input row. Field names serialize to the exact column names the
/// model was trained against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureRow {
    #[serde(rename = "Age")]
    pub age: u32,
    #[serde(rename = "Gender")]
    pub gender: Gender,
    #[serde(rename = "Education Level")]
    pub education_level: EducationLevel,
    #[serde(rename = "Job Title")]
    pub job_title: JobTitle,
    #[serde(rename = "Years of Experience")]
    pub years_experience: u32,
}

impl FeatureRow {
    pub fn value(
        &self,
        column: FeatureColumn,
    ) -> FeatureValue {
        match column {
            FeatureColumn::Age => FeatureValue::Numeric(f64::from(self.age)),
            FeatureColumn::Gender => FeatureValue::Category(self.gender.as_str()),
            FeatureColumn::EducationLevel => FeatureValue::Category(self.education_level.as_str()),
            FeatureColumn::JobTitle => FeatureValue::Category(self.job_title.as_str()),
            FeatureColumn::YearsOfExperience => {
                FeatureValue::Numeric(f64::from(self.years_experience))
            }
        }
    }
}

impl From<&PredictionRequest> for FeatureRow {
    fn from(request: &PredictionRequest) -> Self {
        Self {
            age: request.age,
            gender: request.gender,
            education_level: request.education_level,
            job_title: request.job_title,
            years_experience: request.years_experience,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn row() -> FeatureRow {
        FeatureRow {
            age: 30,
            gender: Gender::Male,
            education_level: EducationLevel::Bachelors,
            job_title: JobTitle::SoftwareEngineer,
            years_experience: 5,
        }
    }

    #[test]
    fn row_serializes_with_training_column_names_in_order() {
        let json = serde_json::to_string(&row()).unwrap();

        assert_eq!(
            json,
            r#"{"Age":30,"Gender":"Male","Education Level":"Bachelor's","Job Title":"Software Engineer","Years of Experience":5}"#
        );
    }

    #[test]
    fn column_names_match_serialized_keys() {
        let json = serde_json::to_value(row()).unwrap();
        let object = json.as_object().unwrap();

        for column in FeatureColumn::ALL {
            assert!(object.contains_key(column.name()), "missing {column}");
        }
        assert_eq!(object.len(), FeatureColumn::ALL.len());
    }

    #[test]
    fn value_exposes_numeric_and_categorical_cells() {
        let row = row();

        assert_eq!(row.value(FeatureColumn::Age), FeatureValue::Numeric(30.0));
        assert_eq!(
            row.value(FeatureColumn::YearsOfExperience),
            FeatureValue::Numeric(5.0)
        );
        assert_eq!(
            row.value(FeatureColumn::EducationLevel),
            FeatureValue::Category("Bachelor's")
        );
    }

    #[test]
    fn categorical_columns_are_flagged() {
        let categorical: Vec<_> = FeatureColumn::ALL
            .into_iter()
            .filter(FeatureColumn::is_categorical)
            .collect();

        assert_eq!(
            categorical,
            vec![
                FeatureColumn::Gender,
                FeatureColumn::EducationLevel,
                FeatureColumn::JobTitle
            ]
        );
    }
}
