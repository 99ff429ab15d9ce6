use crate::domain::account::{Account, AccountId};
use crate::domain::ports::{AccountStoreBox, NotifierBox};
use crate::domain::transfer::TransferRequest;
use crate::error::{InvalidAccountReason, LedgerError, Result};
use tokio::sync::Mutex;

/// Entry point for account management and fund transfers.
///
/// All transfers share one process-wide critical section around the
/// check-debit-credit step. A single lock cannot deadlock on opposite account
/// pairs, at the cost of serialising every transfer's mutation.
pub struct AccountsService {
    account_store: AccountStoreBox,
    notifier: NotifierBox,
    transfer_lock: Mutex<()>,
}

impl AccountsService {
    /// Creates a new `AccountsService`.
    ///
    /// # Arguments
    ///
    /// * `account_store` - The store that owns every account.
    /// * `notifier` - Receives one message per party after each transfer.
    pub fn new(account_store: AccountStoreBox, notifier: NotifierBox) -> Self {
        Self {
            account_store,
            notifier,
            transfer_lock: Mutex::new(()),
        }
    }

    pub async fn create_account(&self, account: Account) -> Result<()> {
        account.ensure_non_negative()?;
        let id = account.id.clone();
        self.account_store.create(account).await?;
        tracing::debug!(account_id = %id, "Account created");
        Ok(())
    }

    pub async fn get_account(&self, id: &AccountId) -> Result<Option<Account>> {
        self.account_store.get(id).await
    }

    /// Every account, ordered by id.
    pub async fn accounts(&self) -> Result<Vec<Account>> {
        let mut accounts = self.account_store.all_accounts().await?;
        accounts.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(accounts)
    }

    /// Moves `request.amount` between two distinct existing accounts.
    ///
    /// Either both balances change or neither does. Notifications go out after
    /// the critical section is released and never affect the outcome.
    pub async fn transfer_funds(&self, request: TransferRequest) -> Result<()> {
        let to_account = self.account_store.get(&request.account_to_id).await?;
        let from_account = self.account_store.get(&request.account_from_id).await?;
        let (from_account, to_account) = validate_accounts(from_account, to_account)?;

        let (source, target) = {
            let _guard = self.transfer_lock.lock().await;

            // Balances read above may be stale; only this read is authoritative.
            let source = self.account_store.get(&from_account.id).await?;
            let target = self.account_store.get(&to_account.id).await?;
            let (mut source, mut target) = validate_accounts(source, target)?;

            if !source.balance.covers(request.amount) {
                tracing::warn!(
                    from = %source.id,
                    balance = %source.balance,
                    amount = %request.amount,
                    "Insufficient balance in account"
                );
                return Err(LedgerError::InsufficientBalance);
            }

            // Apply to the snapshots first so an overflow is caught before the
            // store changes. They double as the post-transfer view for notifying.
            source.debit(request.amount)?;
            target.credit(request.amount).inspect_err(|error| {
                tracing::warn!(to = %target.id, %error, "Transfer would overflow target balance");
            })?;

            self.account_store
                .debit(&source.id, request.amount)
                .await
                .inspect_err(report_mutation_failure)?;
            self.account_store
                .credit(&target.id, request.amount)
                .await
                .inspect_err(report_mutation_failure)?;

            (source, target)
        };

        tracing::info!(
            from = %source.id,
            to = %target.id,
            amount = %request.amount,
            "Transfer completed"
        );

        self.notifier
            .notify_about_transfer(
                &source,
                &format!(
                    "Amount of {} transferred to account {}",
                    request.amount, target.id
                ),
            )
            .await;
        self.notifier
            .notify_about_transfer(
                &target,
                &format!(
                    "Amount of {} received from account {}",
                    request.amount, source.id
                ),
            )
            .await;

        Ok(())
    }

    /// Removes every account. Waits for any in-flight transfer mutation first.
    pub async fn reset(&self) -> Result<()> {
        let _guard = self.transfer_lock.lock().await;
        self.account_store.reset().await
    }
}

fn validate_accounts(
    from_account: Option<Account>,
    to_account: Option<Account>,
) -> Result<(Account, Account)> {
    match (from_account, to_account) {
        (Some(from), Some(to)) if from.id == to.id => {
            tracing::warn!(account_id = %from.id, "Transfer to same account");
            Err(LedgerError::InvalidAccount(InvalidAccountReason::SameAccount))
        }
        (Some(from), Some(to)) => Ok((from, to)),
        _ => {
            tracing::warn!("Invalid account details");
            Err(LedgerError::InvalidAccount(InvalidAccountReason::Missing))
        }
    }
}

fn report_mutation_failure(error: &LedgerError) {
    tracing::error!(%error, "Balance mutation failed inside transfer critical section");
}
