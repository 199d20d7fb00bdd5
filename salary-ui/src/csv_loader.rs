//! CSV loader for batches of employee profiles.
//!
//! ## CSV Format
//!
//! Headers are matched by name (column order does not matter) and use the
//! exact column names the model was trained on. All columns are required.
//!
//! | Column                | Type    | Notes                                   |
//! |-----------------------|---------|-----------------------------------------|
//! | `Age`                 | integer | 20 to 65                                |
//! | `Gender`              | string  | `Male`, `Female`                        |
//! | `Education Level`     | string  | `Bachelor's`, `Master's`, `PhD`         |
//! | `Job Title`           | string  | One of the ten form job titles          |
//! | `Years of Experience` | integer | 0 to 30                                 |
//!
//! ### Example
//!
//! ```csv
//! Age,Gender,Education Level,Job Title,Years of Experience
//! 30,Male,Bachelor's,Software Engineer,5
//! 45,Female,PhD,Director,20
//! ```
use std::io::Read;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use salary_core::{
    AGE_RANGE, EXPERIENCE_RANGE, EducationLevel, Gender, JobTitle, PredictionRequest,
};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout exactly
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Age")]
    age: u32,
    #[serde(rename = "Gender")]
    gender: String,
    #[serde(rename = "Education Level")]
    education_level: String,
    #[serde(rename = "Job Title")]
    job_title: String,
    #[serde(rename = "Years of Experience")]
    years_experience: u32,
}

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Errors that can occur while loading profile rows. Row numbers are 1-based
/// and do not count the header.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Bad structure, missing column or type mismatch.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    #[error("unrecognised {field} '{value}' on row {row}")]
    InvalidOption {
        field: &'static str,
        value: String,
        row: usize,
    },

    #[error("{field} {value} on row {row} is outside {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: u32,
        row: usize,
        min: u32,
        max: u32,
    },
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

fn check_range(
    field: &'static str,
    value: u32,
    range: &RangeInclusive<u32>,
    row: usize,
) -> Result<u32, CsvLoadError> {
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(CsvLoadError::OutOfRange {
            field,
            value,
            row,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

fn parse_option<T>(
    field: &'static str,
    value: String,
    row: usize,
    parse: fn(&str) -> Option<T>,
) -> Result<T, CsvLoadError> {
    parse(&value).ok_or(CsvLoadError::InvalidOption { field, value, row })
}

fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<PredictionRequest, CsvLoadError> {
    Ok(PredictionRequest {
        age: check_range("Age", row.age, &AGE_RANGE, row_number)?,
        gender: parse_option("Gender", row.gender, row_number, Gender::parse)?,
        education_level: parse_option(
            "Education Level",
            row.education_level,
            row_number,
            EducationLevel::parse,
        )?,
        job_title: parse_option("Job Title", row.job_title, row_number, JobTitle::parse)?,
        years_experience: check_range(
            "Years of Experience",
            row.years_experience,
            &EXPERIENCE_RANGE,
            row_number,
        )?,
    })
}

/// Parse profile rows from any reader. Rows are returned in file order.
///
/// # Errors
///
/// * [CsvLoadError::Parse] when the CSV is structurally invalid or a cell
///   has the wrong type.
/// * [CsvLoadError::InvalidOption] for a label outside the form's choices.
/// * [CsvLoadError::OutOfRange] for an age or experience outside the
///   slider bounds.
pub fn load_from_reader<R: Read>(reader: R) -> Result<Vec<PredictionRequest>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(reader);

    reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| convert_row(result?, idx + 1))
        .collect()
}

pub fn load_from_str(input: &str) -> Result<Vec<PredictionRequest>, CsvLoadError> {
    load_from_reader(input.as_bytes())
}

/// Read a file from disk and delegate to [load_from_reader].
pub fn load_from_file(path: &Path) -> Result<Vec<PredictionRequest>, CsvLoadError> {
    let file = std::fs::File::open(path).map_err(|source| CsvLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_reader(std::io::BufReader::new(file))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
