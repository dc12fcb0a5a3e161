//! Domain layer: loan terms and records, the amortization calculation,
//! payments, risk assessment types, and the ports the application layer
//! depends on.

pub mod loan;
pub mod payment;
pub mod ports;
pub mod risk;
pub mod schedule;
