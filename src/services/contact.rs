use crate::models::{AnalysisResult, Decision};

/// Builds pre-filled WhatsApp deep links for handing a respondent over to
/// a broker.
///
/// Link construction only; nothing is ever sent from here.
#[derive(Debug, Clone)]
pub struct ContactService {
    phone_number: String,
}

impl ContactService {
    pub fn new(phone_number: impl Into<String>) -> Self {
        Self {
            phone_number: phone_number.into(),
        }
    }

    /// Deep link with a message referencing the analysis outcome
    pub fn whatsapp_link(&self, result: &AnalysisResult) -> String {
        let message = self.message_for(result);

        format!(
            "https://wa.me/{}?text={}",
            self.phone_number,
            urlencoding::encode(&message)
        )
    }

    /// One template per decision; only the BUY message cites the score
    fn message_for(&self, result: &AnalysisResult) -> String {
        match result.decision {
            Decision::Buy => format!(
                "Hello! I took the housing quiz and my result was BUY \
                 (score: {}/100). I would like to see the recommended listings.",
                result.buy_score
            ),
            Decision::Rent => "Hello! I took the housing quiz and my result was RENT. \
                 I would like to see available options in this category."
                .to_string(),
            Decision::Evaluate => "Hello! I took the housing quiz and I would like a \
                 consultation to weigh renting versus buying."
                .to_string(),
        }
    }
}
