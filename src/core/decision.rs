use crate::models::{CallToAction, Decision, ScoringParams, StayDuration};

/// Classify the clamped buy score into the headline decision.
///
/// Pure threshold partition: >= 65 BUY, <= 40 RENT, 41..=64 EVALUATE
/// (with default parameters).
#[inline]
pub fn classify_decision(buy_score: u8, params: &ScoringParams) -> Decision {
    if buy_score >= params.buy_threshold {
        Decision::Buy
    } else if buy_score <= params.rent_threshold {
        Decision::Rent
    } else {
        Decision::Evaluate
    }
}

/// Human-readable phrase for the intended stay horizon.
///
/// Unrecognized values phrase as the longest horizon.
#[inline]
pub fn stay_phrase(duration: StayDuration) -> &'static str {
    match duration {
        StayDuration::UnderOneYear => "short term",
        StayDuration::OneToThreeYears => "medium term",
        StayDuration::ThreeToSevenYears => "long term",
        StayDuration::SevenYearsOrMore | StayDuration::Unspecified => "very long term",
    }
}

/// Fixed justification template for the decision, parameterized by the
/// stay-duration phrase
pub fn justification(decision: Decision, duration: StayDuration) -> String {
    let phrase = stay_phrase(duration);

    match decision {
        Decision::Buy => format!(
            "Your profile shows solid footing for a purchase. With a {} stay horizon \
             and capital on hand, buying builds equity over time.",
            phrase
        ),
        Decision::Rent => format!(
            "The moment favors the flexibility of renting. Given your {} horizon and \
             current focus, keeping capital liquid is the safer strategy.",
            phrase
        ),
        Decision::Evaluate => "Your scenario is balanced. You have purchasing potential, \
             but renting still offers liquidity advantages. We recommend a detailed \
             credit analysis before deciding."
            .to_string(),
    }
}

/// Suggested follow-up action for the decision
pub fn call_to_action(decision: Decision) -> CallToAction {
    match decision {
        Decision::Buy => CallToAction {
            button_text: "Schedule a viewing of for-sale listings".to_string(),
            action_id: "schedule_sale".to_string(),
        },
        Decision::Rent => CallToAction {
            button_text: "View rental options".to_string(),
            action_id: "view_rental".to_string(),
        },
        Decision::Evaluate => CallToAction {
            button_text: "Speak with a specialist consultant".to_string(),
            action_id: "talk_to_consultant".to_string(),
        },
    }
}
