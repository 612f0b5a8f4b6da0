use super::amount::Amount;
use super::payment_mode::PaymentMode;
use std::fmt::Debug;

/// A payment handler bound to exactly one [`PaymentMode`].
pub trait PaymentStrategy: Debug + Send + Sync {
    /// The mode this strategy handles. Must always return the same value.
    fn register(&self) -> PaymentMode;

    /// Performs the payment and returns a human readable confirmation.
    fn execute(&self, amount: Amount) -> String;
}

pub type PaymentStrategyBox = Box<dyn PaymentStrategy>;
