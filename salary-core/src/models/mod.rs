mod education_level;
mod gender;
mod job_title;
mod prediction_request;
mod salary_estimate;

pub use education_level::EducationLevel;
pub use gender::Gender;
pub use job_title::JobTitle;
pub use prediction_request::{AGE_RANGE, EXPERIENCE_RANGE, PredictionRequest};
pub use salary_estimate::{P25_FACTOR, P75_FACTOR, Percentile, SalaryEstimate};
