use crate::domain::amount::Amount;
use crate::domain::payment_mode::PaymentMode;
use crate::domain::ports::PaymentStrategy;

/// Handles [`PaymentMode::CreditCard`] payments.
#[derive(Debug, Default, Clone, Copy)]
pub struct CreditCardPayment;

impl CreditCardPayment {
    pub fn new() -> Self {
        Self
    }
}

impl PaymentStrategy for CreditCardPayment {
    fn register(&self) -> PaymentMode {
        PaymentMode::CreditCard
    }

    fn execute(&self, amount: Amount) -> String {
        format!("Amount paid via credit card: {amount}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_registers_credit_card() {
        assert_eq!(CreditCardPayment::new().register(), PaymentMode::CreditCard);
    }

    #[test]
    fn test_execute_formats_amount() {
        let strategy = CreditCardPayment::new();
        assert_eq!(
            strategy.execute(Amount::from(500i64)),
            "Amount paid via credit card: 500"
        );
        assert_eq!(
            strategy.execute(Amount::new(dec!(-0.75))),
            "Amount paid via credit card: -0.75"
        );
    }
}
