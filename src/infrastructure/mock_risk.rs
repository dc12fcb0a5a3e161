use crate::domain::loan::{LoanApplication, LoanType};
use crate::domain::ports::RiskScorer;
use crate::domain::risk::{Recommendation, RiskAssessment};
use crate::error::Result;
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal_macros::dec;
use tokio::sync::Mutex;

/// A mocked risk scoring service.
///
/// Stands in for an external model behind the `RiskScorer` port. The score is
/// a hand-written heuristic over the application fields plus a random +/-3
/// perturbation, so repeated assessments of the same application may differ
/// by a few points. Construct with [`MockRiskScorer::with_seed`] when runs
/// need to be reproducible.
pub struct MockRiskScorer {
    rng: Mutex<StdRng>,
}

impl MockRiskScorer {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// A scorer whose perturbation sequence is fixed by `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for MockRiskScorer {
    fn default() -> Self {
        Self::new()
    }
}

/// The deterministic part of the heuristic, before the random perturbation.
/// Clamped to 0-100; higher is safer.
pub fn base_score(application: &LoanApplication) -> u8 {
    let mut score: i32 = 50;

    let principal = application.terms.principal;
    score += if principal <= dec!(10000) {
        15
    } else if principal <= dec!(50000) {
        10
    } else if principal <= dec!(100000) {
        5
    } else if principal <= dec!(500000) {
        -5
    } else {
        -15
    };

    let rate = application.terms.annual_rate_percent;
    score += if rate <= dec!(5) {
        20
    } else if rate <= dec!(10) {
        10
    } else if rate <= dec!(15) {
        0
    } else if rate <= dec!(20) {
        -10
    } else {
        -20
    };

    let term = application.terms.term_months;
    score += if term <= 12 {
        15
    } else if term <= 36 {
        10
    } else if term <= 60 {
        5
    } else if term <= 120 {
        0
    } else {
        -10
    };

    score += match application.loan_type {
        LoanType::Personal => -5,
        LoanType::Business => 10,
        LoanType::Mortgage => 15,
        LoanType::Auto => 5,
        LoanType::Student => 0,
        LoanType::Other => -10,
    };

    if application.co_signer.is_some() {
        score += 15;
    }
    if application.collateral.is_some() {
        score += 10;
    }

    score.clamp(0, 100) as u8
}

/// Human-readable drivers behind the score.
pub fn risk_factors(application: &LoanApplication) -> Vec<String> {
    let mut factors = Vec::new();

    if application.terms.principal > dec!(100000) {
        factors.push("High loan amount increases risk".to_string());
    }
    if application.terms.annual_rate_percent > dec!(15) {
        factors.push("High interest rate indicates higher risk profile".to_string());
    }
    if application.terms.term_months > 120 {
        factors.push("Extended loan term increases default risk".to_string());
    }
    if application.co_signer.is_some() {
        factors.push("Co-signer presence reduces risk".to_string());
    }
    if application.collateral.is_some() {
        factors.push("Collateral backing reduces risk".to_string());
    }

    factors
}

#[async_trait]
impl RiskScorer for MockRiskScorer {
    async fn assess(&self, application: &LoanApplication) -> Result<RiskAssessment> {
        let base = base_score(application);

        let perturbation = {
            let mut rng = self.rng.lock().await;
            rng.gen_range(-3i32..=3)
        };
        let score = (i32::from(base) + perturbation).clamp(0, 100) as u8;

        Ok(RiskAssessment {
            score,
            recommendation: Recommendation::from_score(score),
            factors: risk_factors(application),
        })
    }
}
