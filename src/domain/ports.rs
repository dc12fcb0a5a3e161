use super::loan::{LoanApplication, LoanRecord};
use super::payment::Payment;
use super::risk::RiskAssessment;
use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait LoanStore: Send + Sync {
    async fn store(&self, record: LoanRecord) -> Result<()>;
    async fn get(&self, loan_id: u32) -> Result<Option<LoanRecord>>;
    async fn get_all(&self) -> Result<Vec<LoanRecord>>;
}

#[async_trait]
pub trait PaymentStore: Send + Sync {
    async fn store(&self, payment: Payment) -> Result<()>;
    async fn for_loan(&self, loan_id: u32) -> Result<Vec<Payment>>;
}

/// External scoring service. The bundled implementation is a mocked
/// heuristic; a real model can be swapped in behind this port.
#[async_trait]
pub trait RiskScorer: Send + Sync {
    async fn assess(&self, application: &LoanApplication) -> Result<RiskAssessment>;
}

pub type LoanStoreBox = Box<dyn LoanStore>;
pub type PaymentStoreBox = Box<dyn PaymentStore>;
pub type RiskScorerBox = Box<dyn RiskScorer>;
