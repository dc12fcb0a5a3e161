//! Application layer containing the core business logic orchestration.
//!
//! This module defines the `LoanEngine`, the primary entry point for
//! processing loan applications and payments. It owns the storage and
//! scoring ports and awaits each operation, so callers observe results
//! in submission order.

pub mod engine;
