use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// A job posting as handed over by the ingestion side. Only `title` is
/// required on the wire; every other text field defaults to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub job_type: String,
    #[serde(default)]
    pub salary_min: Option<f64>,
    #[serde(default)]
    pub salary_max: Option<f64>,
    /// "hourly" | "weekly" | "monthly" | "yearly"; anything else is read as yearly.
    #[serde(default)]
    pub salary_interval: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub source_id: Option<String>,
    #[serde(default)]
    pub job_url: Option<String>,
    /// Pre-assigned occupation code. Guessed from the title when absent.
    #[serde(default)]
    pub occupation_code: Option<String>,
    #[serde(default)]
    pub date_posted: Option<NaiveDate>,
}

impl JobPosting {
    /// Rejects postings the scorers cannot compare fairly. Missing data is
    /// fine (scorers fall back to neutral values); nonsensical data is not.
    pub fn validate(&self) -> Result<(), AppError> {
        for (field, value) in [("salary_min", self.salary_min), ("salary_max", self.salary_max)] {
            if let Some(v) = value {
                if !v.is_finite() {
                    return Err(AppError::Validation(format!(
                        "{field} must be a finite number"
                    )));
                }
                if v < 0.0 {
                    return Err(AppError::Validation(format!(
                        "{field} cannot be negative (got {v})"
                    )));
                }
            }
        }
        Ok(())
    }

    /// A short label for logs: source id when present, else the title.
    pub fn label(&self) -> &str {
        self.source_id.as_deref().unwrap_or(&self.title)
    }
}
