use crate::domain::amount::Amount;
use crate::domain::payment_mode::PaymentMode;
use crate::domain::ports::PaymentStrategy;

/// Handles [`PaymentMode::PayPal`] payments.
#[derive(Debug, Default, Clone, Copy)]
pub struct PayPalPayment;

impl PayPalPayment {
    pub fn new() -> Self {
        Self
    }
}

impl PaymentStrategy for PayPalPayment {
    fn register(&self) -> PaymentMode {
        PaymentMode::PayPal
    }

    fn execute(&self, amount: Amount) -> String {
        format!("Amount paid via PayPal: {amount}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registers_paypal() {
        assert_eq!(PayPalPayment::new().register(), PaymentMode::PayPal);
    }

    #[test]
    fn test_execute_formats_amount() {
        assert_eq!(
            PayPalPayment::new().execute(Amount::from(10500i64)),
            "Amount paid via PayPal: 10500"
        );
        assert_eq!(
            PayPalPayment::new().execute(Amount::ZERO),
            "Amount paid via PayPal: 0"
        );
    }
}
