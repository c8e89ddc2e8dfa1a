use crate::domain::payment::PaymentInstruction;
use crate::error::{BrewPayError, Result};
use std::io::Read;

/// Reads payment instructions from a CSV source.
///
/// Wraps `csv::Reader` and provides an iterator over `Result<PaymentInstruction>`.
/// Whitespace around fields is trimmed; the currency string itself is passed
/// through to the router untouched beyond that.
pub struct InstructionReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> InstructionReader<R> {
    /// Creates a new `InstructionReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes instructions.
    pub fn instructions(self) -> impl Iterator<Item = Result<PaymentInstruction>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(BrewPayError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payment::PaymentKind;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reader_valid_stream() {
        let data = "currency, kind, amount\nUSD, charge, 75.50\nEUR, refund, 0.5";
        let reader = InstructionReader::new(data.as_bytes());
        let results: Vec<Result<PaymentInstruction>> = reader.instructions().collect();

        assert_eq!(results.len(), 2);
        let first = results[0].as_ref().unwrap();
        assert_eq!(first.currency, "USD");
        assert_eq!(first.kind, PaymentKind::Charge);
        assert_eq!(first.amount, dec!(75.50));
    }

    #[test]
    fn test_reader_malformed_line() {
        let data = "currency, kind, amount\nUSD, transfer, 1.0";
        let reader = InstructionReader::new(data.as_bytes());
        let results: Vec<Result<PaymentInstruction>> = reader.instructions().collect();

        assert!(results[0].is_err());
    }
}
