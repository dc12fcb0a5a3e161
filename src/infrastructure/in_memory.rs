use crate::domain::loan::LoanRecord;
use crate::domain::payment::Payment;
use crate::domain::ports::{LoanStore, PaymentStore};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for loan records.
///
/// Uses `Arc<RwLock<HashMap<u32, LoanRecord>>>` to allow shared concurrent
/// access. Ideal for testing or one-shot batch runs where persistence is not
/// required.
#[derive(Default, Clone)]
pub struct InMemoryLoanStore {
    records: Arc<RwLock<HashMap<u32, LoanRecord>>>,
}

impl InMemoryLoanStore {
    /// Creates a new, empty in-memory loan store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LoanStore for InMemoryLoanStore {
    async fn store(&self, record: LoanRecord) -> Result<()> {
        let mut records = self.records.write().await;
        records.insert(record.id(), record);
        Ok(())
    }

    async fn get(&self, loan_id: u32) -> Result<Option<LoanRecord>> {
        let records = self.records.read().await;
        Ok(records.get(&loan_id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<LoanRecord>> {
        let records = self.records.read().await;
        Ok(records.values().cloned().collect())
    }
}

/// A thread-safe in-memory store for payments, keyed by loan id.
#[derive(Default, Clone)]
pub struct InMemoryPaymentStore {
    payments: Arc<RwLock<HashMap<u32, Vec<Payment>>>>,
}

impl InMemoryPaymentStore {
    /// Creates a new, empty in-memory payment store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PaymentStore for InMemoryPaymentStore {
    async fn store(&self, payment: Payment) -> Result<()> {
        let mut payments = self.payments.write().await;
        payments.entry(payment.loan_id).or_default().push(payment);
        Ok(())
    }

    async fn for_loan(&self, loan_id: u32) -> Result<Vec<Payment>> {
        let payments = self.payments.read().await;
        Ok(payments.get(&loan_id).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::loan::{LoanApplication, LoanTerms, LoanType, PaymentFrequency};
    use crate::domain::risk::{Recommendation, RiskAssessment};
    use crate::domain::schedule;
    use rust_decimal_macros::dec;

    fn record(id: u32) -> LoanRecord {
        let application = LoanApplication {
            id,
            borrower: "alice".to_string(),
            loan_type: LoanType::Personal,
            terms: LoanTerms {
                principal: dec!(25000),
                annual_rate_percent: dec!(5.25),
                term_months: 36,
                frequency: PaymentFrequency::Monthly,
            },
            purpose: None,
            collateral: None,
            co_signer: None,
        };
        let schedule = schedule::compute(&application.terms);
        LoanRecord {
            application,
            schedule,
            risk: RiskAssessment {
                score: 75,
                recommendation: Recommendation::ApproveWithConditions,
                factors: vec![],
            },
        }
    }

    #[tokio::test]
    async fn test_in_memory_loan_store() {
        let store = InMemoryLoanStore::new();
        let record = record(1);

        store.store(record.clone()).await.unwrap();
        let retrieved = store.get(1).await.unwrap().unwrap();
        assert_eq!(retrieved, record);

        assert!(store.get(2).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_in_memory_loan_store_overwrites_same_id() {
        let store = InMemoryLoanStore::new();
        store.store(record(1)).await.unwrap();

        let mut updated = record(1);
        updated.risk.score = 90;
        store.store(updated.clone()).await.unwrap();

        let retrieved = store.get(1).await.unwrap().unwrap();
        assert_eq!(retrieved, updated);
        assert_eq!(store.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_in_memory_payment_store() {
        let store = InMemoryPaymentStore::new();
        let payment = Payment {
            loan_id: 1,
            amount: dec!(752.08),
            principal_amount: dec!(642.71),
            interest_amount: dec!(109.37),
        };

        store.store(payment.clone()).await.unwrap();
        store.store(payment.clone()).await.unwrap();

        let payments = store.for_loan(1).await.unwrap();
        assert_eq!(payments.len(), 2);
        assert_eq!(payments[0], payment);

        assert!(store.for_loan(2).await.unwrap().is_empty());
    }
}
