use serde::{Deserialize, Serialize};

use crate::models::domain::SurveyAnswers;

/// Request to analyze a completed survey.
///
/// Numeric answer fields are deliberately not range-validated here; the
/// engine accepts extreme values and lets the arithmetic speak
/// (validation of user input belongs to the collecting form).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub answers: SurveyAnswers,
}
