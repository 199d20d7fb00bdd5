//! Plain-text rendering of the predictor page.

use std::fmt::Write;

use salary_core::{EstimateError, Percentile, PredictionRequest, SalaryEstimate};

use crate::app::{MessageType, SalaryApp};
use crate::form::{Choice, PredictionForm, Select, Slider};
use crate::utils::format_currency;

/// Columns used by the longest bar in the distribution chart.
pub const BAR_WIDTH: usize = 40;

const TITLE: &str = "🏢 Employee Salary Predictor";

const INTRO: &str = "\
Predict employee salaries based on:
- Age
- Gender
- Education Level
- Job Title
- Years of Experience";

const ABOUT: &str = "\
About: This app predicts employee salaries using a Random Forest Regressor
model trained on historical salary data.";

const DISTRIBUTION_BLURB: &str = "\
The chart below shows how the predicted salary compares to typical ranges
for similar education levels and experience.";

const FOOTER: &str = "© 2023 Employee Salary Prediction System made by Anurag Tiwari";

fn underline(
    out: &mut String,
    heading: &str,
    ch: char,
) {
    let _ = writeln!(out, "{heading}");
    let _ = writeln!(out, "{}", ch.to_string().repeat(heading.chars().count()));
}

fn slider_line(slider: &Slider) -> String {
    let (min, max) = slider.bounds();
    format!("{}: {} ({min}-{max})", slider.label(), slider.value())
}

fn select_line<T: Choice>(select: &Select<T>) -> String {
    format!("{}: {}", select.label(), select.selected().label())
}

/// Title, intro and about blurb.
pub fn render_header() -> String {
    let mut out = String::new();
    underline(&mut out, TITLE, '=');
    let _ = writeln!(out, "{INTRO}\n");
    let _ = writeln!(out, "{ABOUT}");
    out
}

/// The current state of every input widget.
pub fn render_form(form: &PredictionForm) -> String {
    let mut out = String::new();
    underline(&mut out, "Employee Information", '-');
    for line in [
        slider_line(&form.age),
        select_line(&form.gender),
        select_line(&form.education_level),
        slider_line(&form.years_experience),
        select_line(&form.job_title),
    ] {
        let _ = writeln!(out, "  {line}");
    }
    out
}

fn bar_len(
    value: f64,
    max: f64,
    width: usize,
) -> usize {
    if max <= 0.0 || !value.is_finite() || value <= 0.0 {
        return 0;
    }
    let scaled = (value / max * width as f64).round() as usize;
    scaled.min(width)
}

/// One horizontal bar per percentile, scaled so the largest fills `width`.
pub fn render_bar_chart(
    percentiles: &[Percentile],
    width: usize,
) -> String {
    let max = percentiles
        .iter()
        .map(|p| p.salary)
        .fold(0.0_f64, f64::max);

    let mut out = String::new();
    for p in percentiles {
        let bar = "█".repeat(bar_len(p.salary, max, width));
        let _ = writeln!(
            out,
            "{:>4} │{bar:<width$} {}",
            p.label,
            format_currency(p.salary)
        );
    }
    out
}

/// The result line followed by the distribution section.
pub fn render_estimate(estimate: &SalaryEstimate) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Predicted Salary: {}\n",
        format_currency(estimate.predicted)
    );
    underline(&mut out, "Salary Distribution for Similar Profiles", '-');
    let _ = writeln!(out, "{DISTRIBUTION_BLURB}\n");
    out.push_str(&render_bar_chart(&estimate.percentiles(), BAR_WIDTH));
    out
}

/// Horizontal rule and credits closing every page.
pub fn render_footer() -> String {
    format!("{}\n{FOOTER}\n", "─".repeat(BAR_WIDTH + 20))
}

/// The full page: header, form, the outcome of the last predict action and
/// the footer.
pub fn render_page(app: &SalaryApp) -> String {
    let mut out = render_header();
    out.push('\n');
    out.push_str(&render_form(&app.form));

    match (&app.result, &app.status_message) {
        (Some(estimate), _) => {
            out.push('\n');
            out.push_str(&render_estimate(estimate));
        }
        (None, Some((msg, kind))) => {
            let prefix = match kind {
                MessageType::Error => "error: ",
                MessageType::Info | MessageType::Success => "",
            };
            let _ = write!(out, "\n{prefix}{msg}\n");
        }
        (None, None) => {}
    }
    out.push('\n');
    out.push_str(&render_footer());
    out
}

/// One line of batch output: the profile followed by its estimate or error.
pub fn render_batch_row(
    row: usize,
    request: &PredictionRequest,
    outcome: &Result<SalaryEstimate, EstimateError>,
) -> String {
    let profile = format!(
        "{row:>3}. {}, {}, {}, {}, {} yrs",
        request.age,
        request.gender,
        request.education_level,
        request.job_title,
        request.years_experience
    );
    match outcome {
        Ok(estimate) => format!(
            "{profile}: {} (25th {}, 75th {})",
            format_currency(estimate.predicted),
            format_currency(estimate.p25),
            format_currency(estimate.p75)
        ),
        Err(e) => format!("{profile}: error: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use salary_core::{
        EducationLevel, FeatureColumn, FeatureRow, Gender, JobTitle, ModelError, SalaryEstimator,
        SalaryModel,
    };

    use super::*;

    struct FixedModel(f64);

    impl SalaryModel for FixedModel {
        fn kind(&self) -> &'static str {
            "fixed"
        }
        fn predict(
            &self,
            rows: &[FeatureRow],
        ) -> Result<Vec<f64>, ModelError> {
            Ok(vec![self.0; rows.len()])
        }
    }

    #[test]
    fn bar_chart_scales_to_largest_value() {
        let estimate = SalaryEstimate::from_prediction(75000.0);

        let chart = render_bar_chart(&estimate.percentiles(), 40);
        let lines: Vec<_> = chart.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            format!("25th │{}{} $60,000.00", "█".repeat(27), " ".repeat(13))
        );
        assert_eq!(
            lines[1],
            format!("50th │{}{} $75,000.00", "█".repeat(33), " ".repeat(7))
        );
        assert_eq!(lines[2], format!("75th │{} $90,000.00", "█".repeat(40)));
    }

    #[test]
    fn bar_chart_of_zero_prediction_has_empty_bars() {
        let estimate = SalaryEstimate::from_prediction(0.0);

        let chart = render_bar_chart(&estimate.percentiles(), 10);

        for line in chart.lines() {
            assert!(!line.contains('█'), "{line}");
            assert!(line.ends_with("$0.00"), "{line}");
        }
    }

    #[test]
    fn estimate_section_shows_result_line_first() {
        let text = render_estimate(&SalaryEstimate::from_prediction(75000.0));

        assert!(text.starts_with("Predicted Salary: $75,000.00\n"));
        assert!(text.contains("Salary Distribution for Similar Profiles"));
        assert!(text.contains("$90,000.00"));
    }

    #[test]
    fn form_section_lists_every_widget() {
        let text = render_form(&PredictionForm::new());

        assert!(text.contains("Age: 30 (20-65)"));
        assert!(text.contains("Gender: Male"));
        assert!(text.contains("Education Level: Bachelor's"));
        assert!(text.contains("Years of Experience: 5 (0-30)"));
        assert!(text.contains("Job Title: Software Engineer"));
    }

    #[test]
    fn page_before_prediction_has_no_result() {
        let app = SalaryApp::new(SalaryEstimator::new(Box::new(FixedModel(1.0))));

        let page = render_page(&app);

        assert!(page.starts_with(TITLE));
        assert!(!page.contains("Predicted Salary"));
    }

    #[test]
    fn page_after_prediction_includes_chart() {
        let mut app = SalaryApp::new(SalaryEstimator::new(Box::new(FixedModel(50000.0))));
        app.on_predict().unwrap();

        let page = render_page(&app);

        assert!(page.contains("Predicted Salary: $50,000.00"));
        assert!(page.contains("25th │"));
        assert!(page.contains("$60,000.00"));
    }

    #[test]
    fn page_ends_with_footer_after_result() {
        let mut app = SalaryApp::new(SalaryEstimator::new(Box::new(FixedModel(75000.0))));
        app.on_predict().unwrap();

        let page = render_page(&app);
        let lines: Vec<_> = page.lines().collect();

        assert_eq!(lines[lines.len() - 1], FOOTER);
        assert_eq!(lines[lines.len() - 2], "─".repeat(BAR_WIDTH + 20));
        assert!(page.find("75th │").unwrap() < page.find(FOOTER).unwrap());
    }

    #[test]
    fn page_before_prediction_still_has_footer() {
        let app = SalaryApp::new(SalaryEstimator::new(Box::new(FixedModel(1.0))));

        assert!(render_page(&app).ends_with(&format!("{FOOTER}\n")));
    }

    #[test]
    fn page_after_failure_shows_error_only() {
        let mut app = SalaryApp::new(SalaryEstimator::new(Box::new(FixedModel(f64::NAN))));
        let _ = app.on_predict();

        let page = render_page(&app);

        assert!(page.contains("error: Prediction failed:"));
        assert!(!page.contains("25th"));
    }

    fn request() -> PredictionRequest {
        PredictionRequest {
            age: 30,
            gender: Gender::Male,
            education_level: EducationLevel::Bachelors,
            job_title: JobTitle::SoftwareEngineer,
            years_experience: 5,
        }
    }

    #[test]
    fn batch_row_shows_profile_and_band() {
        let line = render_batch_row(
            1,
            &request(),
            &Ok(SalaryEstimate::from_prediction(75000.0)),
        );

        assert_eq!(
            line,
            "  1. 30, Male, Bachelor's, Software Engineer, 5 yrs: \
             $75,000.00 (25th $60,000.00, 75th $90,000.00)"
        );
    }

    #[test]
    fn batch_row_shows_inference_error() {
        let err = EstimateError::Inference(ModelError::UnknownCategory {
            column: FeatureColumn::JobTitle,
            value: "Software Engineer".to_string(),
        });

        let line = render_batch_row(12, &request(), &Err(err));

        assert!(line.starts_with(" 12. 30, Male"), "{line}");
        assert!(line.contains(": error: salary prediction failed:"), "{line}");
    }
}
