//! Domain types: payment modes, amounts, requests and the strategy port.

pub mod amount;
pub mod payment;
pub mod payment_mode;
pub mod ports;
