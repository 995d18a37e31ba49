//! Morada Algo - decision engine for the Morada buy-vs-rent advisor
//!
//! This library provides the core analysis algorithm used by the Morada
//! real-estate quiz. It scores a respondent's survey answers into a
//! buy-vs-rent decision and ranks matching property listings.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{calculate_buy_score, classify_decision, Analyzer};
pub use crate::models::{
    AnalysisResult, Decision, PropertyListing, Recommendation, ScoringParams, SurveyAnswers,
};
pub use crate::services::{ContactService, PropertyCatalog};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PropertyType, RelocationReason, RenovationTolerance, StayDuration, Urgency};

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work together
        let answers = SurveyAnswers {
            name: "Smoke Test".to_string(),
            monthly_budget: 3000.0,
            available_down_payment: 50_000.0,
            desired_neighborhoods: vec!["Centro".to_string()],
            relocation_reason: RelocationReason::Career,
            intended_stay_duration: StayDuration::ThreeToSevenYears,
            desired_bedrooms: 2,
            renovation_tolerance: RenovationTolerance::Partial,
            urgency: Urgency::OneToThreeMonths,
            property_type: PropertyType::Apartment,
            contact_opt_in: true,
        };

        let catalog = PropertyCatalog::builtin();
        let result = Analyzer::with_default_params().evaluate(&answers, catalog.listings());

        assert!(result.buy_score <= 100);
        assert!(result.recommendations.len() <= 3);
    }
}
