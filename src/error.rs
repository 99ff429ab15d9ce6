use crate::domain::account::AccountId;
use thiserror::Error;

/// Why a transfer was refused on account grounds.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidAccountReason {
    #[error("Invalid account details")]
    Missing,
    #[error("Transfer to same account not valid")]
    SameAccount,
}

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Account id {0} already exists!")]
    DuplicateAccount(AccountId),
    #[error("{0}")]
    InvalidAccount(InvalidAccountReason),
    #[error("Insufficient balance in account")]
    InsufficientBalance,
    #[error("Balance of account {0} would overflow")]
    BalanceOverflow(AccountId),
    /// A mutator was handed an id the store does not hold. Only reachable
    /// through misuse of the store, never from a correctly ordered transfer.
    #[error("Account {0} not found")]
    AccountNotFound(AccountId),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
