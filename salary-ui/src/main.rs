use std::ops::RangeInclusive;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, builder::PossibleValuesParser};
use tracing::{debug, info, warn};

use salary_core::model::{forest, linear};
use salary_core::{
    AGE_RANGE, EXPERIENCE_RANGE, EducationLevel, Gender, JobTitle, ModelRegistry,
    SalaryEstimator,
};
use salary_ui::{SalaryApp, config::AppConfig, csv_loader, logging, render};

// ─── CLI definition ──────────────────────────────────────────────────────────

fn slider_range(range: RangeInclusive<u32>) -> RangeInclusive<i64> {
    i64::from(*range.start())..=i64::from(*range.end())
}

/// Employee salary predictor.
///
/// Loads the salary model once, fills the employee form from the flags below
/// and prints the predicted salary with its 25th/50th/75th percentile band.
#[derive(Debug, Parser)]
#[command(name = "SalaryPredictor", version, about)]
struct Cli {
    /// TOML config file. Defaults to `salary_predictor.toml` when present.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Model artifact path, overriding the config file.
    #[arg(long)]
    model: Option<PathBuf>,

    /// Model artifact format, overriding the config file.
    #[arg(long, value_parser = PossibleValuesParser::new([forest::FORMAT_NAME, linear::FORMAT_NAME]))]
    format: Option<String>,

    #[arg(long, default_value_t = 30,
          value_parser = clap::value_parser!(u32).range(slider_range(AGE_RANGE)))]
    age: u32,

    #[arg(long, default_value = "Male",
          value_parser = PossibleValuesParser::new(Gender::ALL.iter().map(Gender::as_str)))]
    gender: String,

    #[arg(long, default_value = "Bachelor's",
          value_parser = PossibleValuesParser::new(EducationLevel::ALL.iter().map(EducationLevel::as_str)))]
    education: String,

    #[arg(long, default_value = "Software Engineer",
          value_parser = PossibleValuesParser::new(JobTitle::ALL.iter().map(JobTitle::as_str)))]
    job_title: String,

    /// Years of experience.
    #[arg(long, default_value_t = 5,
          value_parser = clap::value_parser!(u32).range(slider_range(EXPERIENCE_RANGE)))]
    experience: u32,

    /// Predict every profile in this CSV instead of the single form.
    #[arg(long, conflicts_with_all = ["age", "gender", "education", "job_title", "experience"])]
    batch: Option<PathBuf>,

    /// Log filter directive, overriding the config file and `RUST_LOG`.
    #[arg(long)]
    log_level: Option<String>,

    /// Also append log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ─── modes ───────────────────────────────────────────────────────────────────

fn run_form(
    cli: &Cli,
    estimator: SalaryEstimator,
) -> Result<()> {
    let mut app = SalaryApp::new(estimator);
    app.form.age.set(cli.age);
    app.form.gender.select_label(&cli.gender)?;
    app.form.education_level.select_label(&cli.education)?;
    app.form.job_title.select_label(&cli.job_title)?;
    app.form.years_experience.set(cli.experience);

    let outcome = app.on_predict();
    print!("{}", render::render_page(&app));

    outcome.map(|_| ()).context("salary prediction failed")
}

fn run_batch(
    path: &std::path::Path,
    estimator: &SalaryEstimator,
) -> Result<()> {
    let requests = csv_loader::load_from_file(path)
        .with_context(|| format!("Failed to load profiles: {}", path.display()))?;
    info!(rows = requests.len(), "loaded profiles from {}", path.display());

    let mut failed = 0;
    for (idx, request) in requests.iter().enumerate() {
        let outcome = estimator.estimate(request);
        if outcome.is_err() {
            failed += 1;
        }
        println!("{}", render::render_batch_row(idx + 1, request, &outcome));
    }

    if failed > 0 {
        bail!("{failed} of {} predictions failed", requests.len());
    }
    Ok(())
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    logging::init_default_logging();

    let cli = Cli::parse();

    let config = AppConfig::load_or_default(cli.config.as_deref())?;

    let env_filter_set = std::env::var_os("RUST_LOG").is_some();
    if let Some(level) = config.log_directive(cli.log_level.as_deref(), env_filter_set) {
        logging::set_log_level(level)?;
    }
    if let Some(log_file) = cli.log_file.as_ref().or(config.log_file.as_ref()) {
        logging::enable_file_logging(log_file)?;
    }

    let mut model_config = config.model_config();
    if let Some(path) = &cli.model {
        model_config.path = path.clone();
    }
    if let Some(format) = &cli.format {
        model_config.format = format.clone();
    }

    debug!(format = %model_config.format, path = %model_config.path.display(), "loading salary model");
    let estimator = match SalaryEstimator::load(&ModelRegistry::with_builtin_formats(), &model_config) {
        Ok(estimator) => estimator,
        Err(e) => {
            warn!(error = %e, "refusing to start without a model");
            return Err(e).context("cannot start the salary predictor");
        }
    };

    match &cli.batch {
        Some(path) => run_batch(path, &estimator),
        None => run_form(&cli, estimator),
    }
}
