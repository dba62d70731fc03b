pub mod json;
pub mod md;

use crate::bank::QuestionBank;
use crate::error::ReadinessError;
use crate::types::report::AssessmentResults;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(results: &AssessmentResults, format: OutputFormat) -> Result<String, ReadinessError> {
    match format {
        OutputFormat::Json => json::to_json(results).map_err(ReadinessError::Json),
        OutputFormat::Md => Ok(md::to_markdown(results)),
    }
}

pub fn render_bank(bank: &QuestionBank, format: OutputFormat) -> Result<String, ReadinessError> {
    match format {
        OutputFormat::Json => json::bank_to_json(bank).map_err(ReadinessError::Json),
        OutputFormat::Md => Ok(md::bank_to_markdown(bank)),
    }
}
