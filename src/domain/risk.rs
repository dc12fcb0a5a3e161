use serde::{Deserialize, Serialize};

/// Lending recommendation derived from a risk score.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recommendation {
    Approve,
    ApproveWithConditions,
    ReviewRequired,
    Reject,
}

impl Recommendation {
    /// Maps a 0-100 risk score to a recommendation. Higher scores mean
    /// lower risk.
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => Recommendation::Approve,
            60..=79 => Recommendation::ApproveWithConditions,
            40..=59 => Recommendation::ReviewRequired,
            _ => Recommendation::Reject,
        }
    }
}

/// The outcome of scoring a loan application.
///
/// Produced by an external scoring service behind the `RiskScorer` port;
/// the bundled implementation is a heuristic stand-in, not a model.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct RiskAssessment {
    /// 0-100, higher is safer.
    pub score: u8,
    pub recommendation: Recommendation,
    pub factors: Vec<String>,
}
