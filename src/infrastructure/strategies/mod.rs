//! Concrete payment strategies and the functions that assemble them.
//!
//! [`strategy_for`] matches on every [`PaymentMode`] variant, so introducing a
//! new mode without a strategy is a compile error rather than a runtime lookup
//! miss.

pub mod credit_card;
pub mod paypal;

pub use credit_card::CreditCardPayment;
pub use paypal::PayPalPayment;

use crate::domain::payment_mode::PaymentMode;
use crate::domain::ports::PaymentStrategyBox;

/// Builds the strategy that handles `mode`.
pub fn strategy_for(mode: PaymentMode) -> PaymentStrategyBox {
    match mode {
        PaymentMode::CreditCard => Box::new(CreditCardPayment::new()),
        PaymentMode::PayPal => Box::new(PayPalPayment::new()),
    }
}

/// One strategy per known mode.
pub fn default_strategies() -> Vec<PaymentStrategyBox> {
    strategies_for(PaymentMode::ALL)
}

/// Strategies for the given modes, in the order given. Duplicates are kept.
pub fn strategies_for(modes: impl IntoIterator<Item = PaymentMode>) -> Vec<PaymentStrategyBox> {
    modes.into_iter().map(strategy_for).collect()
}
