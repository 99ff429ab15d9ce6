#![allow(dead_code)]

use async_trait::async_trait;
use ledger::application::accounts_service::AccountsService;
use ledger::domain::account::{Account, AccountId, Balance};
use ledger::domain::ports::Notifier;
use ledger::infrastructure::in_memory::InMemoryAccountStore;
use rust_decimal::Decimal;
use std::sync::{Arc, Mutex};

/// One delivered notification, with the account as the notifier saw it.
#[derive(Debug, Clone, PartialEq)]
pub struct Sent {
    pub account_id: AccountId,
    pub balance: Balance,
    pub message: String,
}

/// Collects every notification so tests can assert on them.
#[derive(Default, Clone)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<Sent>>>,
}

impl RecordingNotifier {
    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify_about_transfer(&self, account: &Account, message: &str) {
        self.sent.lock().unwrap().push(Sent {
            account_id: account.id.clone(),
            balance: account.balance,
            message: message.to_string(),
        });
    }
}

pub fn id(s: &str) -> AccountId {
    AccountId::new(s).unwrap()
}

pub fn service_with_recorder() -> (AccountsService, RecordingNotifier) {
    let notifier = RecordingNotifier::default();
    let service = AccountsService::new(
        Box::new(InMemoryAccountStore::new()),
        Box::new(notifier.clone()),
    );
    (service, notifier)
}

pub async fn open(service: &AccountsService, account_id: &str, balance: Decimal) {
    let account = Account::new(id(account_id), Balance::new(balance)).unwrap();
    service.create_account(account).await.unwrap();
}

pub async fn balance_of(service: &AccountsService, account_id: &str) -> Balance {
    service
        .get_account(&id(account_id))
        .await
        .unwrap()
        .unwrap()
        .balance
}

pub async fn total_balance(service: &AccountsService) -> Balance {
    service
        .accounts()
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.balance)
        .sum()
}
