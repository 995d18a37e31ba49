// Core algorithm exports
pub mod decision;
pub mod matcher;
pub mod scoring;

pub use decision::{call_to_action, classify_decision, justification, stay_phrase};
pub use matcher::Analyzer;
pub use scoring::calculate_buy_score;
