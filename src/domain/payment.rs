use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A payment recorded against a loan, split into its principal and
/// interest portions.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct Payment {
    pub loan_id: u32,
    pub amount: Decimal,
    pub principal_amount: Decimal,
    pub interest_amount: Decimal,
}

/// Sum of the amounts paid so far.
pub fn total_paid(payments: &[Payment]) -> Decimal {
    payments
        .iter()
        .fold(Decimal::ZERO, |sum, payment| sum + payment.amount)
}
