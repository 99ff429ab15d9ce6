use crate::domain::account::{Account, AccountId, Amount};
use crate::domain::ports::AccountStore;
use crate::error::{LedgerError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for accounts.
///
/// Uses `Arc<RwLock<HashMap<AccountId, Account>>>` so clones share the same map.
/// Every mutation takes the write lock, which makes duplicate-check-then-insert
/// atomic against concurrent creates.
#[derive(Default, Clone)]
pub struct InMemoryAccountStore {
    accounts: Arc<RwLock<HashMap<AccountId, Account>>>,
}

impl InMemoryAccountStore {
    /// Creates a new, empty in-memory account store.
    pub fn new() -> Self {
        Self::default()
    }

    async fn update<F>(&self, id: &AccountId, apply: F) -> Result<()>
    where
        F: FnOnce(&mut Account) -> Result<()> + Send,
    {
        let mut accounts = self.accounts.write().await;
        let account = accounts
            .get_mut(id)
            .ok_or_else(|| LedgerError::AccountNotFound(id.clone()))?;
        apply(account)
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn create(&self, account: Account) -> Result<()> {
        let mut accounts = self.accounts.write().await;
        match accounts.entry(account.id.clone()) {
            Entry::Occupied(entry) => Err(LedgerError::DuplicateAccount(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(account);
                Ok(())
            }
        }
    }

    async fn get(&self, id: &AccountId) -> Result<Option<Account>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(id).cloned())
    }

    async fn debit(&self, id: &AccountId, amount: Amount) -> Result<()> {
        self.update(id, |account| account.debit(amount)).await
    }

    async fn credit(&self, id: &AccountId, amount: Amount) -> Result<()> {
        self.update(id, |account| account.credit(amount)).await
    }

    async fn all_accounts(&self) -> Result<Vec<Account>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().cloned().collect())
    }

    async fn reset(&self) -> Result<()> {
        self.accounts.write().await.clear();
        Ok(())
    }
}
