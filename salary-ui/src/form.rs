//! Input widgets for the employee form.
//!
//! Sliders clamp every value into their range and selectors only hold one of
//! their fixed options, so a request built from the form is always within
//! domain.

use std::ops::RangeInclusive;

use salary_core::{
    AGE_RANGE, EXPERIENCE_RANGE, EducationLevel, Gender, JobTitle, PredictionRequest,
};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("'{value}' is not a valid {field}")]
    UnknownOption { field: &'static str, value: String },
}

/// A bounded integer slider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slider {
    label: &'static str,
    min: u32,
    max: u32,
    value: u32,
}

impl Slider {
    /// `default` is clamped into `range`.
    pub fn new(
        label: &'static str,
        range: RangeInclusive<u32>,
        default: u32,
    ) -> Self {
        let (min, max) = range.into_inner();
        Self {
            label,
            min,
            max,
            value: default.clamp(min, max),
        }
    }

    /// Moves the slider, clamping to its bounds. Returns the value it landed on.
    pub fn set(
        &mut self,
        value: u32,
    ) -> u32 {
        self.value = value.clamp(self.min, self.max);
        self.value
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn bounds(&self) -> (u32, u32) {
        (self.min, self.max)
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}

/// Something a [`Select`] can offer.
pub trait Choice: Copy + PartialEq + 'static {
    fn label(&self) -> &'static str;
}

impl Choice for Gender {
    fn label(&self) -> &'static str {
        self.as_str()
    }
}

impl Choice for EducationLevel {
    fn label(&self) -> &'static str {
        self.as_str()
    }
}

impl Choice for JobTitle {
    fn label(&self) -> &'static str {
        self.as_str()
    }
}

/// A fixed-choice selector. The first option is selected initially.
#[derive(Debug, Clone, PartialEq)]
pub struct Select<T: Choice> {
    label: &'static str,
    options: &'static [T],
    selected: usize,
}

impl<T: Choice> Select<T> {
    /// `options` must not be empty.
    pub fn new(
        label: &'static str,
        options: &'static [T],
    ) -> Self {
        debug_assert!(!options.is_empty(), "selector '{label}' has no options");
        Self {
            label,
            options,
            selected: 0,
        }
    }

    pub fn select(
        &mut self,
        value: T,
    ) -> Result<(), FormError> {
        match self.options.iter().position(|o| *o == value) {
            Some(index) => {
                self.selected = index;
                Ok(())
            }
            None => Err(FormError::UnknownOption {
                field: self.label,
                value: value.label().to_string(),
            }),
        }
    }

    /// Selects the option whose label matches exactly.
    pub fn select_label(
        &mut self,
        label: &str,
    ) -> Result<(), FormError> {
        match self.options.iter().position(|o| o.label() == label) {
            Some(index) => {
                self.selected = index;
                Ok(())
            }
            None => Err(FormError::UnknownOption {
                field: self.label,
                value: label.to_string(),
            }),
        }
    }

    pub fn selected(&self) -> T {
        self.options[self.selected]
    }

    pub fn options(&self) -> &'static [T] {
        self.options
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}

/// The employee information form.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionForm {
    pub age: Slider,
    pub gender: Select<Gender>,
    pub education_level: Select<EducationLevel>,
    pub years_experience: Slider,
    pub job_title: Select<JobTitle>,
}

impl Default for PredictionForm {
    fn default() -> Self {
        Self {
            age: Slider::new("Age", AGE_RANGE, 30),
            gender: Select::new("Gender", &Gender::ALL),
            education_level: Select::new("Education Level", &EducationLevel::ALL),
            years_experience: Slider::new("Years of Experience", EXPERIENCE_RANGE, 5),
            job_title: Select::new("Job Title", &JobTitle::ALL),
        }
    }
}

impl PredictionForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current widget state.
    pub fn to_request(&self) -> PredictionRequest {
        PredictionRequest {
            age: self.age.value(),
            gender: self.gender.selected(),
            education_level: self.education_level.selected(),
            job_title: self.job_title.selected(),
            years_experience: self.years_experience.value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_form_matches_initial_widget_state() {
        let request = PredictionForm::new().to_request();

        assert_eq!(
            request,
            PredictionRequest {
                age: 30,
                gender: Gender::Male,
                education_level: EducationLevel::Bachelors,
                job_title: JobTitle::SoftwareEngineer,
                years_experience: 5,
            }
        );
    }

    #[test]
    fn slider_clamps_to_bounds() {
        let mut age = Slider::new("Age", AGE_RANGE, 30);

        assert_eq!(age.set(10), 20);
        assert_eq!(age.set(99), 65);
        assert_eq!(age.set(42), 42);
        assert_eq!(age.bounds(), (20, 65));
    }

    #[test]
    fn slider_accepts_exact_bounds() {
        let mut experience = Slider::new("Years of Experience", EXPERIENCE_RANGE, 5);

        assert_eq!(experience.set(0), 0);
        assert_eq!(experience.set(30), 30);
    }

    #[test]
    fn slider_clamps_out_of_range_default() {
        let slider = Slider::new("Age", AGE_RANGE, 5);

        assert_eq!(slider.value(), 20);
    }

    #[test]
    fn select_label_picks_matching_option() {
        let mut form = PredictionForm::new();

        form.job_title.select_label("Data Analyst").unwrap();
        form.education_level.select_label("PhD").unwrap();

        let request = form.to_request();
        assert_eq!(request.job_title, JobTitle::DataAnalyst);
        assert_eq!(request.education_level, EducationLevel::Phd);
    }

    #[test]
    fn select_label_rejects_unknown_option_and_keeps_selection() {
        let mut form = PredictionForm::new();

        let err = form.job_title.select_label("Chief Astronaut").unwrap_err();

        assert_eq!(
            err,
            FormError::UnknownOption {
                field: "Job Title",
                value: "Chief Astronaut".to_string(),
            }
        );
        assert_eq!(form.job_title.selected(), JobTitle::SoftwareEngineer);
    }

    #[test]
    fn select_rejects_value_outside_restricted_options() {
        static ONLY_MALE: [Gender; 1] = [Gender::Male];
        let mut gender = Select::new("Gender", &ONLY_MALE);

        assert!(gender.select(Gender::Female).is_err());
        assert!(gender.select(Gender::Male).is_ok());
    }

    #[test]
    fn to_request_builds_fresh_snapshot_each_time() {
        let mut form = PredictionForm::new();
        let before = form.to_request();

        form.age.set(45);
        form.gender.select(Gender::Female).unwrap();
        let after = form.to_request();

        assert_eq!(before.age, 30);
        assert_eq!(after.age, 45);
        assert_eq!(after.gender, Gender::Female);
    }
}
