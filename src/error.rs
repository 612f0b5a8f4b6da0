use crate::domain::payment_mode::PaymentMode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PaymentError>;

#[derive(Error, Debug)]
pub enum PaymentError {
    /// No strategy was registered for the requested mode.
    #[error("Unsupported payment mode: {0}")]
    UnsupportedMode(PaymentMode),
    #[error("Unknown payment mode identifier: {0:?}")]
    UnknownMode(String),
    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
