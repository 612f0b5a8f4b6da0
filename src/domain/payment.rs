use super::amount::Amount;
use super::payment_mode::PaymentMode;
use serde::{Deserialize, Serialize};

/// A single payment to dispatch, as read from a batch file.
#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
pub struct PaymentRequest {
    pub mode: PaymentMode,
    pub amount: Amount,
}

impl PaymentRequest {
    pub fn new(mode: PaymentMode, amount: impl Into<Amount>) -> Self {
        Self {
            mode,
            amount: amount.into(),
        }
    }
}

/// The outcome of a dispatched payment.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct Receipt {
    pub mode: PaymentMode,
    pub amount: Amount,
    pub confirmation: String,
}
