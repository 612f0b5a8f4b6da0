use crate::domain::payment::PaymentRequest;
use crate::error::{PaymentError, Result};
use std::io::Read;

/// Reads payment requests from a CSV source with a `mode,amount` header.
///
/// Whitespace around fields is trimmed and rows with extra columns are tolerated.
pub struct PaymentReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PaymentReader<R> {
    /// Creates a new `PaymentReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes requests.
    ///
    /// A malformed row yields an error for that row only; iteration continues
    /// with the next one.
    pub fn requests(self) -> impl Iterator<Item = Result<PaymentRequest>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PaymentError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payment_mode::PaymentMode;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reader_valid_stream() {
        let data = "mode, amount\nCREDIT_CARD, 500\npaypal, 12.50";
        let reader = PaymentReader::new(data.as_bytes());
        let results: Vec<Result<PaymentRequest>> = reader.requests().collect();

        assert_eq!(results.len(), 2);
        let first = results[0].as_ref().unwrap();
        assert_eq!(first.mode, PaymentMode::CreditCard);
        assert_eq!(first.amount.to_string(), "500");

        let second = results[1].as_ref().unwrap();
        assert_eq!(second.mode, PaymentMode::PayPal);
        assert_eq!(second.amount.value(), dec!(12.50));
    }

    #[test]
    fn test_reader_malformed_lines() {
        let data = "mode, amount\ncash, 1.0\npaypal, lots\npaypal, 3";
        let reader = PaymentReader::new(data.as_bytes());
        let results: Vec<Result<PaymentRequest>> = reader.requests().collect();

        assert_eq!(results.len(), 3);
        assert!(results[0].is_err());
        assert!(results[1].is_err());
        assert!(results[2].is_ok());
    }
}
