use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use std::time::Duration;

use crate::core::Analyzer;
use crate::models::{
    AnalyzeRequest, AnalyzeResponse, HealthResponse, NeighborhoodsResponse, PropertiesResponse,
};
use crate::services::{ContactService, PropertyCatalog};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<PropertyCatalog>,
    pub analyzer: Analyzer,
    pub contact: ContactService,
    /// Cosmetic delay before answering an analysis, not part of the
    /// engine contract
    pub processing_delay: Duration,
}

/// Configure all analysis-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/analyze", web::post().to(analyze))
        .route("/properties", web::get().to(list_properties))
        .route("/neighborhoods", web::get().to(list_neighborhoods));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Analyze endpoint
///
/// POST /api/v1/analyze
///
/// Request body:
/// ```json
/// {
///   "answers": {
///     "monthlyBudget": 3000,
///     "availableDownPayment": 50000,
///     "desiredNeighborhoods": ["Centro"],
///     "relocationReason": "career",
///     "intendedStayDuration": "3-7y",
///     "desiredBedrooms": 2,
///     "renovationTolerance": "partial",
///     "urgency": "1-3mo"
///   }
/// }
/// ```
async fn analyze(state: web::Data<AppState>, req: web::Json<AnalyzeRequest>) -> impl Responder {
    let answers = &req.answers;

    tracing::info!(
        "Analyzing survey against {} listing(s), {} desired neighborhood(s)",
        state.catalog.len(),
        answers.desired_neighborhoods.len()
    );

    // UX affordance only; the engine itself returns immediately
    if state.processing_delay > Duration::ZERO {
        tokio::time::sleep(state.processing_delay).await;
    }

    let result = state.analyzer.evaluate(answers, state.catalog.listings());
    let contact_url = state.contact.whatsapp_link(&result);

    tracing::info!(
        "Decision {:?} with buy score {} and {} recommendation(s)",
        result.decision,
        result.buy_score,
        result.recommendations.len()
    );

    HttpResponse::Ok().json(AnalyzeResponse {
        analysis_id: uuid::Uuid::new_v4().to_string(),
        result,
        contact_url,
    })
}

/// Full catalog, for property card rendering
///
/// GET /api/v1/properties
async fn list_properties(state: web::Data<AppState>) -> impl Responder {
    let properties = state.catalog.listings().to_vec();
    let total = properties.len();

    HttpResponse::Ok().json(PropertiesResponse { properties, total })
}

/// Neighborhood options for the survey form
///
/// GET /api/v1/neighborhoods
async fn list_neighborhoods() -> impl Responder {
    HttpResponse::Ok().json(NeighborhoodsResponse {
        neighborhoods: PropertyCatalog::known_neighborhoods()
            .iter()
            .map(|n| n.to_string())
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }

    #[test]
    fn test_app_state_is_cloneable() {
        let state = AppState {
            catalog: Arc::new(PropertyCatalog::builtin()),
            analyzer: Analyzer::with_default_params(),
            contact: ContactService::new("557592812153"),
            processing_delay: Duration::ZERO,
        };

        let cloned = state.clone();
        assert_eq!(cloned.catalog.len(), state.catalog.len());
    }
}
