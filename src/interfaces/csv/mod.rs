//! CSV adapters used by the command line driver.

pub mod account_reader;
pub mod account_writer;
pub mod transfer_reader;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use std::str::FromStr;

/// Parses a decimal from the raw field text. The csv deserializer would
/// otherwise infer numeric fields as floats and drop scale or precision.
fn deserialize_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Decimal::from_str(&raw).map_err(serde::de::Error::custom)
}
