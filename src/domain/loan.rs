use super::risk::RiskAssessment;
use super::schedule::AmortizationResult;
use crate::error::LoanError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// How often scheduled payments occur over the life of a loan.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentFrequency {
    Weekly,
    Biweekly,
    Monthly,
    Quarterly,
    Annually,
}

impl PaymentFrequency {
    /// Number of scheduled payments in a year under this frequency.
    pub fn payments_per_year(&self) -> u32 {
        match self {
            PaymentFrequency::Weekly => 52,
            PaymentFrequency::Biweekly => 26,
            PaymentFrequency::Monthly => 12,
            PaymentFrequency::Quarterly => 4,
            PaymentFrequency::Annually => 1,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "UPPERCASE")]
pub enum LoanType {
    Personal,
    Business,
    Mortgage,
    Auto,
    Student,
    Other,
}

/// The numeric terms of a loan, as accepted from the input boundary.
///
/// Monetary and percentage values are carried as `Decimal`; the amortization
/// calculation converts them to floating point internally.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct LoanTerms {
    pub principal: Decimal,
    pub annual_rate_percent: Decimal,
    pub term_months: u32,
    pub frequency: PaymentFrequency,
}

impl LoanTerms {
    /// Range checks applied at the input boundary. The amortization
    /// calculation itself assumes validated terms and does not defend
    /// against out-of-range values.
    pub fn validate(&self) -> Result<(), LoanError> {
        if self.principal <= Decimal::ZERO {
            return Err(LoanError::ValidationError(
                "Principal must be greater than 0".to_string(),
            ));
        }
        if self.annual_rate_percent < Decimal::ZERO {
            return Err(LoanError::ValidationError(
                "Interest rate must be non-negative".to_string(),
            ));
        }
        if self.annual_rate_percent > dec!(100) {
            return Err(LoanError::ValidationError(
                "Interest rate cannot exceed 100%".to_string(),
            ));
        }
        if self.term_months < 1 {
            return Err(LoanError::ValidationError(
                "Term must be at least 1 month".to_string(),
            ));
        }
        if self.term_months > 600 {
            return Err(LoanError::ValidationError(
                "Term cannot exceed 600 months".to_string(),
            ));
        }
        Ok(())
    }
}

/// A loan application as submitted by a borrower.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct LoanApplication {
    pub id: u32,
    pub borrower: String,
    pub loan_type: LoanType,
    pub terms: LoanTerms,
    pub purpose: Option<String>,
    pub collateral: Option<String>,
    pub co_signer: Option<String>,
}

/// A processed loan: the application together with its amortization summary
/// and risk assessment. This is what the loan store persists.
///
/// Records carry no lifecycle of their own; re-submitting an application
/// with the same id recomputes and overwrites the record.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct LoanRecord {
    pub application: LoanApplication,
    pub schedule: AmortizationResult,
    pub risk: RiskAssessment,
}

impl LoanRecord {
    pub fn id(&self) -> u32 {
        self.application.id
    }
}
