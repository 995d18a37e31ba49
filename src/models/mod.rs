// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AnalysisResult, CallToAction, Decision, PropertyListing, PropertyType, Recommendation,
    RelocationReason, RenovationTolerance, ScoringParams, StayDuration, SurveyAnswers, Urgency,
};
pub use requests::AnalyzeRequest;
pub use responses::{
    AnalyzeResponse, ErrorResponse, HealthResponse, NeighborhoodsResponse, PropertiesResponse,
};
