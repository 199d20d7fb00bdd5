//! Runs the `SalaryPredictor` binary against the fixture artifacts.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use salary_core::ModelRegistry;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn run(args: &[&str]) -> Output {
    let workdir = tempfile::tempdir().unwrap();
    Command::new(env!("CARGO_BIN_EXE_SalaryPredictor"))
        .args(args)
        .current_dir(workdir.path())
        .env("RUST_LOG", "warn")
        .output()
        .expect("binary should launch")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn default_form_prints_reference_prediction() {
    let model = fixture("salary_predictor.json");

    let output = run(&["--model", model.to_str().unwrap()]);

    assert!(output.status.success(), "{}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Predicted Salary: $75,000.00"), "{out}");
    assert!(out.contains("25th │"), "{out}");
    assert!(out.contains("$90,000.00"), "{out}");
    assert!(
        out.trim_end()
            .ends_with("© 2023 Employee Salary Prediction System made by Anurag Tiwari"),
        "{out}"
    );
}

#[test]
fn form_flags_fill_the_request() {
    let model = fixture("salary_predictor.json");

    let output = run(&[
        "--model",
        model.to_str().unwrap(),
        "--age",
        "45",
        "--gender",
        "Female",
        "--education",
        "PhD",
        "--job-title",
        "Director",
        "--experience",
        "20",
    ]);

    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("Predicted Salary: $155,000.00"));
}

#[test]
fn missing_model_exits_before_predicting() {
    let output = run(&["--model", "nowhere/salary_predictor.json"]);

    assert!(!output.status.success());
    assert!(!stdout(&output).contains("Predicted Salary"));
    assert!(stderr(&output).contains("salary model unavailable"), "{}", stderr(&output));
}

#[test]
fn age_outside_slider_is_rejected_by_the_parser() {
    let model = fixture("salary_predictor.json");

    let output = run(&["--model", model.to_str().unwrap(), "--age", "19"]);

    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
}

#[test]
fn unknown_job_title_is_rejected_by_the_parser() {
    let model = fixture("salary_predictor.json");

    let output = run(&["--model", model.to_str().unwrap(), "--job-title", "Astronaut"]);

    assert!(!output.status.success());
}

#[test]
fn format_choices_come_from_the_registry() {
    let model = fixture("salary_predictor.json");

    let output = run(&["--model", model.to_str().unwrap(), "--format", "xgboost"]);

    assert!(!output.status.success());
    let err = stderr(&output);
    for format in ModelRegistry::with_builtin_formats().available_formats() {
        assert!(err.contains(format), "{err}");
    }
}

#[test]
fn batch_prints_one_line_per_profile() {
    let model = fixture("salary_predictor.json");
    let profiles = fixture("sample_profiles.csv");

    let output = run(&[
        "--model",
        model.to_str().unwrap(),
        "--batch",
        profiles.to_str().unwrap(),
    ]);

    assert!(output.status.success(), "{}", stderr(&output));
    let out = stdout(&output);
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines.len(), 3, "{out}");
    assert!(lines[1].contains("Director") && lines[1].contains("$155,000.00"));
}

#[test]
fn batch_with_unseen_category_reports_failures() {
    let model = fixture("linear_without_directors.json");
    let profiles = fixture("sample_profiles.csv");

    let output = run(&[
        "--model",
        model.to_str().unwrap(),
        "--format",
        "linear",
        "--batch",
        profiles.to_str().unwrap(),
    ]);

    assert!(!output.status.success());
    let out = stdout(&output);
    assert!(out.contains("error: salary prediction failed"), "{out}");
    assert!(stderr(&output).contains("1 of 3 predictions failed"));
}
