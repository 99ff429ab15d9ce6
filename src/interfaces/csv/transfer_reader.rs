use crate::domain::transfer::TransferRequest;
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct TransferRecord {
    account_from_id: String,
    account_to_id: String,
    #[serde(deserialize_with = "super::deserialize_decimal")]
    amount: Decimal,
}

/// Reads transfer requests (`account_from_id,account_to_id,amount`) from a CSV source.
///
/// Wraps `csv::Reader`, trimming whitespace and tolerating ragged rows. Each row
/// is validated into a `TransferRequest` as it is read.
pub struct TransferReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> TransferReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and validates transfers, so large
    /// files stream without being loaded into memory.
    pub fn transfers(self) -> impl Iterator<Item = Result<TransferRequest>> {
        self.reader
            .into_deserialize::<TransferRecord>()
            .map(|result| -> Result<TransferRequest> {
                let record = result?;
                TransferRequest::parse(&record.account_from_id, &record.account_to_id, record.amount)
            })
    }
}
