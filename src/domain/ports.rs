use super::account::{Account, AccountId, Amount};
use crate::error::Result;
use async_trait::async_trait;

/// Storage for accounts, keyed by id.
///
/// Implementations own every `Account` record; callers only ever see clones.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Inserts a new account. Fails with `DuplicateAccount` if the id is taken,
    /// leaving the existing record untouched. The check and the insert are atomic.
    async fn create(&self, account: Account) -> Result<()>;
    async fn get(&self, id: &AccountId) -> Result<Option<Account>>;
    /// Does not check sufficiency. Fails with `AccountNotFound` for unknown ids.
    async fn debit(&self, id: &AccountId, amount: Amount) -> Result<()>;
    async fn credit(&self, id: &AccountId, amount: Amount) -> Result<()>;
    async fn all_accounts(&self) -> Result<Vec<Account>>;
    /// Drops every account. Administrative, used for test isolation.
    async fn reset(&self) -> Result<()>;
}

/// Informs an account holder about a completed transfer.
///
/// Fire-and-forget: there is no return value because the caller never acts on
/// the outcome. Implementations own their failure reporting and must not panic.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify_about_transfer(&self, account: &Account, message: &str);
}

pub type AccountStoreBox = Box<dyn AccountStore>;
pub type NotifierBox = Box<dyn Notifier>;
