use serde::{Deserialize, Serialize};
use validator::Validate;

/// How long the respondent intends to stay in the next home
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StayDuration {
    #[serde(rename = "<1y")]
    UnderOneYear,
    #[serde(rename = "1-3y")]
    OneToThreeYears,
    #[serde(rename = "3-7y")]
    ThreeToSevenYears,
    #[serde(rename = ">=7y")]
    SevenYearsOrMore,
    /// Unrecognized wire value. Scores as "no adjustment".
    #[serde(other)]
    Unspecified,
}

/// Why the respondent is moving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelocationReason {
    Career,
    Family,
    Investment,
    WealthBuilding,
    Independence,
    #[serde(other)]
    Unspecified,
}

/// How soon the respondent needs to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Urgency {
    #[serde(rename = "immediate")]
    Immediate,
    #[serde(rename = "1-3mo")]
    OneToThreeMonths,
    #[serde(rename = "3-6mo")]
    ThreeToSixMonths,
    #[serde(rename = ">6mo")]
    OverSixMonths,
    #[serde(other)]
    Unspecified,
}

/// Willingness to take on a renovation.
///
/// Only the exact `no` value triggers the matching penalty; `partial`
/// behaves like `yes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenovationTolerance {
    Yes,
    No,
    Partial,
    #[serde(other)]
    Unspecified,
}

/// Property type preference, carried for display and contact only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Apartment,
    House,
    #[serde(other)]
    Unspecified,
}

/// Completed survey answers, immutable for the duration of one evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyAnswers {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "monthlyBudget")]
    pub monthly_budget: f64,
    #[serde(rename = "availableDownPayment")]
    pub available_down_payment: f64,
    #[serde(rename = "desiredNeighborhoods", default)]
    pub desired_neighborhoods: Vec<String>,
    #[serde(rename = "relocationReason")]
    pub relocation_reason: RelocationReason,
    #[serde(rename = "intendedStayDuration")]
    pub intended_stay_duration: StayDuration,
    #[serde(rename = "desiredBedrooms")]
    pub desired_bedrooms: u8,
    #[serde(rename = "renovationTolerance")]
    pub renovation_tolerance: RenovationTolerance,
    pub urgency: Urgency,
    #[serde(rename = "propertyType", default = "default_property_type")]
    pub property_type: PropertyType,
    #[serde(rename = "contactOptIn", default)]
    pub contact_opt_in: bool,
}

fn default_property_type() -> PropertyType {
    PropertyType::Unspecified
}

impl SurveyAnswers {
    /// Whether the listing's neighborhood is one of the desired ones
    pub fn prefers_neighborhood(&self, neighborhood: &str) -> bool {
        self.desired_neighborhoods.iter().any(|n| n == neighborhood)
    }
}

/// A property listing from the catalog, read-only to the engine.
///
/// Numeric and boolean fields default to zero/false on the wire so a
/// malformed entry scores nothing for the affected term instead of
/// aborting the evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PropertyListing {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub neighborhood: String,
    #[serde(rename = "salePrice", default)]
    pub sale_price: f64,
    #[serde(rename = "monthlyRent", default)]
    pub monthly_rent: f64,
    #[serde(default)]
    pub bedrooms: u8,
    #[serde(rename = "areaSqM", default)]
    pub area_sq_m: f64,
    #[serde(rename = "needsRenovation", default)]
    pub needs_renovation: bool,
    #[serde(rename = "imageUrl", default)]
    pub image_url: Option<String>,
}

impl PropertyListing {
    pub fn for_sale(&self) -> bool {
        self.sale_price > 0.0
    }

    pub fn for_rent(&self) -> bool {
        self.monthly_rent > 0.0
    }
}

/// Headline recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    Buy,
    Rent,
    Evaluate,
}

/// Suggested follow-up action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToAction {
    #[serde(rename = "buttonText")]
    pub button_text: String,
    #[serde(rename = "actionId")]
    pub action_id: String,
}

/// A ranked property match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub title: String,
    #[serde(rename = "matchScore")]
    pub match_score: i32,
    #[serde(rename = "matchReason")]
    pub match_reason: String,
}

/// Complete result of one evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub decision: Decision,
    #[serde(rename = "buyScore")]
    pub buy_score: u8,
    pub justification: String,
    pub recommendations: Vec<Recommendation>,
    #[serde(rename = "callToAction")]
    pub call_to_action: CallToAction,
    pub notes: String,
}

/// Tunable scoring parameters.
///
/// Defaults reproduce the production rule set; the fields exist so the
/// thresholds can be tuned from configuration without touching the rules.
#[derive(Debug, Clone, Copy)]
pub struct ScoringParams {
    /// Reference purchase price the down payment is measured against
    pub reference_price: f64,
    /// Entry-capital ratio above which the purchase bonus applies
    pub strong_entry_ratio: f64,
    /// Entry-capital ratio below which the thin-capital penalty applies
    pub thin_entry_ratio: f64,
    /// Buy score at or above which the decision is BUY
    pub buy_threshold: u8,
    /// Buy score at or below which the decision is RENT
    pub rent_threshold: u8,
    /// Rent is affordable up to this multiple of the monthly budget
    pub rent_budget_factor: f64,
    /// Sale price is affordable under this multiple of the monthly budget
    pub purchase_budget_multiplier: f64,
    /// Maximum number of recommendations returned
    pub max_recommendations: usize,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            reference_price: 500_000.0,
            strong_entry_ratio: 0.4,
            thin_entry_ratio: 0.05,
            buy_threshold: 65,
            rent_threshold: 40,
            rent_budget_factor: 1.2,
            purchase_budget_multiplier: 200.0,
            max_recommendations: 3,
        }
    }
}
