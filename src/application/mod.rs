//! Application layer containing the payment dispatch orchestration.
//!
//! This module defines the `PaymentExecutor`, which owns the table of payment
//! strategies and routes each payment to the strategy registered for its mode.

pub mod executor;
