use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::{EducationLevel, Gender, JobTitle};

/// Ages the age slider can produce.
pub const AGE_RANGE: RangeInclusive<u32> = 20..=65;

/// Years of experience the experience slider can produce.
pub const EXPERIENCE_RANGE: RangeInclusive<u32> = 0..=30;

/// One employee profile, built fresh from the form on every predict action.
///
/// Numeric fields are expected to lie within [`AGE_RANGE`] and
/// [`EXPERIENCE_RANGE`]. Input boundaries enforce this; the estimator does not
/// re-check it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub age: u32,
    pub gender: Gender,
    pub education_level: EducationLevel,
    pub job_title: JobTitle,
    pub years_experience: u32,
}

impl PredictionRequest {
    /// Returns `true` when both numeric fields lie within their slider bounds.
    pub fn is_within_domain(&self) -> bool {
        AGE_RANGE.contains(&self.age) && EXPERIENCE_RANGE.contains(&self.years_experience)
    }
}
