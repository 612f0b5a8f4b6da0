//! Payment dispatch by strategy.
//!
//! A [`PaymentExecutor`](application::executor::PaymentExecutor) is built once
//! from a set of [`PaymentStrategy`](domain::ports::PaymentStrategy) handlers and
//! routes each payment to the handler registered for its
//! [`PaymentMode`](domain::payment_mode::PaymentMode).

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;
pub mod observability;
