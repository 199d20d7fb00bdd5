use serde::{Deserialize, Serialize};

/// Multiplier for the illustrative 25th percentile bar.
pub const P25_FACTOR: f64 = 0.8;

/// Multiplier for the illustrative 75th percentile bar.
pub const P75_FACTOR: f64 = 1.2;

/// A point prediction plus the three percentile values shown in the chart.
///
/// The percentiles are a fixed ±20% band around the prediction, not a
/// statistical distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryEstimate {
    pub predicted: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
}

/// One labelled bar of the distribution chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Percentile {
    pub label: &'static str,
    pub salary: f64,
}

impl SalaryEstimate {
    /// Derives the display values from a raw model prediction.
    pub fn from_prediction(predicted: f64) -> Self {
        Self {
            predicted,
            p25: predicted * P25_FACTOR,
            p50: predicted,
            p75: predicted * P75_FACTOR,
        }
    }

    /// The chart bars in display order.
    pub fn percentiles(&self) -> [Percentile; 3] {
        [
            Percentile {
                label: "25th",
                salary: self.p25,
            },
            Percentile {
                label: "50th",
                salary: self.p50,
            },
            Percentile {
                label: "75th",
                salary: self.p75,
            },
        ]
    }
}
