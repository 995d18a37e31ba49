use crate::core::decision::{call_to_action, classify_decision, justification};
use crate::core::scoring::calculate_buy_score;
use crate::models::{
    AnalysisResult, Decision, PropertyListing, Recommendation, RenovationTolerance,
    ScoringParams, SurveyAnswers,
};

/// Match score can never exceed this before the renovation penalty
const MATCH_SCORE_CAP: i32 = 99;

/// Note attached to every analysis
const ANALYSIS_NOTE: &str =
    "Calculation based on a proprietary local market analysis rule set.";

/// Main analysis orchestrator.
///
/// # Pipeline stages
/// 1. Buy-score computation over the survey answers
/// 2. Threshold classification into BUY / RENT / EVALUATE
/// 3. Per-listing match scoring against the catalog
/// 4. Ranking and truncation to the top recommendations
#[derive(Debug, Clone)]
pub struct Analyzer {
    params: ScoringParams,
}

impl Analyzer {
    pub fn new(params: ScoringParams) -> Self {
        Self { params }
    }

    pub fn with_default_params() -> Self {
        Self {
            params: ScoringParams::default(),
        }
    }

    /// Evaluate a completed survey against the property catalog.
    ///
    /// Total function: never fails, never mutates its inputs, and returns
    /// a freshly allocated result. Unrecognized categorical values score
    /// as "no adjustment".
    pub fn evaluate(
        &self,
        answers: &SurveyAnswers,
        catalog: &[PropertyListing],
    ) -> AnalysisResult {
        let buy_score = calculate_buy_score(answers, &self.params);
        let decision = classify_decision(buy_score, &self.params);

        let mut recommendations: Vec<Recommendation> = catalog
            .iter()
            .map(|listing| self.score_listing(listing, answers, decision))
            .collect();

        // Stable sort: ties keep catalog order
        recommendations.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        recommendations.truncate(self.params.max_recommendations);

        AnalysisResult {
            decision,
            buy_score,
            justification: justification(decision, answers.intended_stay_duration),
            recommendations,
            call_to_action: call_to_action(decision),
            notes: ANALYSIS_NOTE.to_string(),
        }
    }

    /// Score a single listing against the answers and the decision.
    ///
    /// Additive terms in fixed order: neighborhood, transaction alignment,
    /// bedroom fit, affordability; then the 99-point cap, then the
    /// renovation penalty, which can pull a capped score back down and
    /// replaces the collected reasons outright.
    fn score_listing(
        &self,
        listing: &PropertyListing,
        answers: &SurveyAnswers,
        decision: Decision,
    ) -> Recommendation {
        let mut score: i32 = 0;
        let mut reasons: Vec<&str> = Vec::new();

        // Location carries the highest weight; anything else in the city
        // gets a base presence score
        if answers.prefers_neighborhood(&listing.neighborhood) {
            score += 40;
            reasons.push("desired neighborhood");
        } else {
            score += 10;
        }

        // Transaction type vs decision; EVALUATE earns no alignment bonus
        match decision {
            Decision::Buy if listing.for_sale() => score += 20,
            Decision::Rent if listing.for_rent() => score += 20,
            _ => {}
        }

        // Bedroom fit; fewer bedrooms than desired earns nothing
        if listing.bedrooms == answers.desired_bedrooms {
            score += 15;
            reasons.push("ideal size");
        } else if listing.bedrooms > answers.desired_bedrooms {
            score += 10;
            reasons.push("extra space");
        }

        // Affordability heuristic, not a mortgage calculation
        if decision == Decision::Rent {
            if listing.monthly_rent <= answers.monthly_budget * self.params.rent_budget_factor {
                score += 15;
            }
        } else if listing.sale_price
            < answers.monthly_budget * self.params.purchase_budget_multiplier
        {
            score += 15;
        }

        score = score.min(MATCH_SCORE_CAP);

        // Single explanation slot; the renovation penalty overwrites it
        // rather than appending
        let mut match_reason = if reasons.is_empty() {
            "good opportunity in the area.".to_string()
        } else {
            format!("{}.", reasons.join(", "))
        };

        if listing.needs_renovation && answers.renovation_tolerance == RenovationTolerance::No {
            score -= 30;
            match_reason = "requires renovation (caution).".to_string();
        }

        Recommendation {
            id: listing.id.clone(),
            title: listing.title.clone(),
            match_score: score,
            match_reason,
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::with_default_params()
    }
}
