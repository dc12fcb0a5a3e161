use super::loan::LoanTerms;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// The amortization summary for a loan: a pure value derived from the terms,
/// recomputed whenever any input changes.
///
/// All three fields are rounded to cents. To rounding error,
/// `total_amount == periodic_payment * total payments` and
/// `total_interest == total_amount - principal`.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone, Copy)]
pub struct AmortizationResult {
    pub periodic_payment: Decimal,
    pub total_interest: Decimal,
    pub total_amount: Decimal,
}

/// Derives the periodic payment, total interest and total amount for the
/// given terms.
///
/// The calculation runs in `f64` and converts back to `Decimal` with
/// half-up rounding at the cent, only at the boundary. It assumes terms
/// that passed [`LoanTerms::validate`] and performs no range checks of
/// its own.
pub fn compute(terms: &LoanTerms) -> AmortizationResult {
    let principal = terms.principal.to_f64().unwrap_or_default();
    let annual_rate = terms.annual_rate_percent.to_f64().unwrap_or_default() / 100.0;
    let payments_per_year = f64::from(terms.frequency.payments_per_year());

    // Fractional when the term does not line up with the payment period
    // (e.g. a 13-month term paid annually). Kept unrounded for parity with
    // the reference arithmetic.
    let total_payments = f64::from(terms.term_months) / 12.0 * payments_per_year;
    let period_rate = annual_rate / payments_per_year;

    let payment = if period_rate == 0.0 {
        // No interest: straight-line split of the principal.
        principal / total_payments
    } else {
        let growth = (1.0 + period_rate).powf(total_payments);
        principal * (period_rate * growth) / (growth - 1.0)
    };

    let total_amount = payment * total_payments;
    let total_interest = total_amount - principal;

    AmortizationResult {
        periodic_payment: round_to_cents(payment),
        total_interest: round_to_cents(total_interest),
        total_amount: round_to_cents(total_amount),
    }
}

fn round_to_cents(value: f64) -> Decimal {
    Decimal::from_f64(value)
        .unwrap_or_default()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
