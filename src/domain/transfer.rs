use super::account::{AccountId, Amount};
use crate::error::Result;
use rust_decimal::Decimal;

/// A request to move `amount` from one account to another.
///
/// Only carries already-validated parts; whether the accounts exist, differ,
/// and cover the amount is decided by the service at transfer time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    pub account_from_id: AccountId,
    pub account_to_id: AccountId,
    pub amount: Amount,
}

impl TransferRequest {
    pub fn new(account_from_id: AccountId, account_to_id: AccountId, amount: Amount) -> Self {
        Self {
            account_from_id,
            account_to_id,
            amount,
        }
    }

    /// Builds a request from raw input, validating every field.
    pub fn parse(from: &str, to: &str, amount: Decimal) -> Result<Self> {
        Ok(Self::new(
            AccountId::new(from)?,
            AccountId::new(to)?,
            Amount::new(amount)?,
        ))
    }
}
