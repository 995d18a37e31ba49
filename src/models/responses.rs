use serde::{Deserialize, Serialize};

use crate::models::domain::{AnalysisResult, PropertyListing};

/// Response for the analyze endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    #[serde(rename = "analysisId")]
    pub analysis_id: String,
    pub result: AnalysisResult,
    /// Pre-filled WhatsApp deep link referencing the outcome
    #[serde(rename = "contactUrl")]
    pub contact_url: String,
}

/// Response for the properties endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertiesResponse {
    pub properties: Vec<PropertyListing>,
    pub total: usize,
}

/// Response for the neighborhoods endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeighborhoodsResponse {
    pub neighborhoods: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
