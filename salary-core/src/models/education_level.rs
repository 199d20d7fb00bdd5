use std::fmt;

use serde::{Deserialize, Serialize};

/// Highest completed degree, spelled exactly as the model was trained on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EducationLevel {
    #[serde(rename = "Bachelor's")]
    Bachelors,
    #[serde(rename = "Master's")]
    Masters,
    #[serde(rename = "PhD")]
    Phd,
}

impl EducationLevel {
    /// Selector order.
    pub const ALL: [EducationLevel; 3] = [
        EducationLevel::Bachelors,
        EducationLevel::Masters,
        EducationLevel::Phd,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bachelors => "Bachelor's",
            Self::Masters => "Master's",
            Self::Phd => "PhD",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Bachelor's" => Some(Self::Bachelors),
            "Master's" => Some(Self::Masters),
            "PhD" => Some(Self::Phd),
            _ => None,
        }
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
