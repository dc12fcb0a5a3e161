use crate::domain::loan::{LoanApplication, LoanRecord};
use crate::domain::payment::{self, Payment};
use crate::domain::ports::{LoanStoreBox, PaymentStoreBox, RiskScorerBox};
use crate::domain::schedule;
use crate::error::{LoanError, Result};
use rust_decimal::Decimal;

/// The main entry point for processing loan applications.
///
/// `LoanEngine` validates incoming applications, derives their amortization
/// summary, obtains a risk assessment from the scoring port, and persists
/// the resulting records. It owns the storage backends and ensures
/// sequential consistency by awaiting storage operations for each
/// application.
pub struct LoanEngine {
    loan_store: LoanStoreBox,
    payment_store: PaymentStoreBox,
    risk_scorer: RiskScorerBox,
}

impl LoanEngine {
    /// Creates a new `LoanEngine` instance.
    ///
    /// # Arguments
    ///
    /// * `loan_store` - The store for processed loan records.
    /// * `payment_store` - The store for payments made against loans.
    /// * `risk_scorer` - The scoring service consulted for each application.
    pub fn new(
        loan_store: LoanStoreBox,
        payment_store: PaymentStoreBox,
        risk_scorer: RiskScorerBox,
    ) -> Self {
        Self {
            loan_store,
            payment_store,
            risk_scorer,
        }
    }

    /// Submits a loan application for processing.
    ///
    /// The terms are range-checked before the amortization calculation runs;
    /// the calculation itself assumes validated input. Re-submitting an
    /// application with an existing id recomputes and overwrites the stored
    /// record.
    pub async fn process_application(&self, application: LoanApplication) -> Result<()> {
        application.terms.validate()?;

        let schedule = schedule::compute(&application.terms);
        let risk = self.risk_scorer.assess(&application).await?;

        self.loan_store
            .store(LoanRecord {
                application,
                schedule,
                risk,
            })
            .await
    }

    /// Records a payment against an existing loan.
    pub async fn record_payment(&self, payment: Payment) -> Result<()> {
        if self.loan_store.get(payment.loan_id).await?.is_none() {
            return Err(LoanError::ValidationError(format!(
                "No loan with id {}",
                payment.loan_id
            )));
        }
        self.payment_store.store(payment).await
    }

    /// The amount still owed on a loan: total amount minus payments made.
    /// Returns `None` for unknown loan ids.
    pub async fn outstanding_balance(&self, loan_id: u32) -> Result<Option<Decimal>> {
        let Some(record) = self.loan_store.get(loan_id).await? else {
            return Ok(None);
        };
        let payments = self.payment_store.for_loan(loan_id).await?;
        Ok(Some(
            record.schedule.total_amount - payment::total_paid(&payments),
        ))
    }

    /// Consumes the engine and returns all processed records, sorted by
    /// loan id.
    pub async fn into_results(self) -> Result<Vec<LoanRecord>> {
        let mut records = self.loan_store.get_all().await?;
        records.sort_by_key(|record| record.id());
        Ok(records)
    }
}
