use std::fmt;

use serde::{Deserialize, Serialize};

/// The fixed set of job titles offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobTitle {
    #[serde(rename = "Software Engineer")]
    SoftwareEngineer,
    #[serde(rename = "Data Scientist")]
    DataScientist,
    #[serde(rename = "Data Analyst")]
    DataAnalyst,
    #[serde(rename = "Product Manager")]
    ProductManager,
    #[serde(rename = "Marketing Analyst")]
    MarketingAnalyst,
    #[serde(rename = "Sales Manager")]
    SalesManager,
    #[serde(rename = "HR Manager")]
    HrManager,
    #[serde(rename = "Financial Analyst")]
    FinancialAnalyst,
    #[serde(rename = "Senior Manager")]
    SeniorManager,
    #[serde(rename = "Director")]
    Director,
}

impl JobTitle {
    /// Selector order.
    pub const ALL: [JobTitle; 10] = [
        JobTitle::SoftwareEngineer,
        JobTitle::DataScientist,
        JobTitle::DataAnalyst,
        JobTitle::ProductManager,
        JobTitle::MarketingAnalyst,
        JobTitle::SalesManager,
        JobTitle::HrManager,
        JobTitle::FinancialAnalyst,
        JobTitle::SeniorManager,
        JobTitle::Director,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SoftwareEngineer => "Software Engineer",
            Self::DataScientist => "Data Scientist",
            Self::DataAnalyst => "Data Analyst",
            Self::ProductManager => "Product Manager",
            Self::MarketingAnalyst => "Marketing Analyst",
            Self::SalesManager => "Sales Manager",
            Self::HrManager => "HR Manager",
            Self::FinancialAnalyst => "Financial Analyst",
            Self::SeniorManager => "Senior Manager",
            Self::Director => "Director",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|title| title.as_str() == s)
    }
}

impl fmt::Display for JobTitle {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
