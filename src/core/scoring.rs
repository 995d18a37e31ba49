use crate::models::{RelocationReason, ScoringParams, StayDuration, SurveyAnswers, Urgency};

/// Neutral starting point for the buy score
const BASE_SCORE: i32 = 50;

/// Calculate the buy-propensity score (0-100) for a set of survey answers.
///
/// Starts from a neutral base of 50 and applies independent additive
/// adjustments:
///   stay duration:   <1y -30, 1-3y -10, 3-7y +10, >=7y +30
///   entry capital:   ratio > 0.4 +20, ratio < 0.05 -15
///   reason:          investment/wealth_building +15, independence -5
///   urgency:         immediate -10
///
/// Each adjustment is its own rule function so rules can be tested and
/// reordered in isolation; the sum is clamped to [0, 100].
pub fn calculate_buy_score(answers: &SurveyAnswers, params: &ScoringParams) -> u8 {
    let adjustments = [
        stay_duration_adjustment(answers.intended_stay_duration),
        entry_capital_adjustment(answers.available_down_payment, params),
        relocation_reason_adjustment(answers.relocation_reason),
        urgency_adjustment(answers.urgency),
    ];

    let raw = BASE_SCORE + adjustments.iter().sum::<i32>();

    raw.clamp(0, 100) as u8
}

/// Longer stay horizons favor buying
#[inline]
fn stay_duration_adjustment(duration: StayDuration) -> i32 {
    match duration {
        StayDuration::UnderOneYear => -30,
        StayDuration::OneToThreeYears => -10,
        StayDuration::ThreeToSevenYears => 10,
        StayDuration::SevenYearsOrMore => 30,
        StayDuration::Unspecified => 0,
    }
}

/// Down payment measured against a fixed reference price.
///
/// Two-threshold step function: a strong entry (> 40% of the reference)
/// earns a bonus, a thin entry (< 5%) a penalty, and the wide band in
/// between adjusts nothing.
#[inline]
fn entry_capital_adjustment(down_payment: f64, params: &ScoringParams) -> i32 {
    let ratio = down_payment / params.reference_price;

    if ratio > params.strong_entry_ratio {
        20
    } else if ratio < params.thin_entry_ratio {
        -15
    } else {
        0
    }
}

/// Investment-driven moves favor buying; first-home independence
/// usually starts with a rental
#[inline]
fn relocation_reason_adjustment(reason: RelocationReason) -> i32 {
    match reason {
        RelocationReason::Investment | RelocationReason::WealthBuilding => 15,
        RelocationReason::Independence => -5,
        _ => 0,
    }
}

/// Buying on an immediate timeline is hard to execute well
#[inline]
fn urgency_adjustment(urgency: Urgency) -> i32 {
    match urgency {
        Urgency::Immediate => -10,
        _ => 0,
    }
}
