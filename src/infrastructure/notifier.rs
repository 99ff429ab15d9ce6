use crate::domain::account::Account;
use crate::domain::ports::Notifier;
use async_trait::async_trait;

/// Stand-in for a real delivery channel (mail, push). Emits one `tracing`
/// event per notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingNotifier;

impl LoggingNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for LoggingNotifier {
    async fn notify_about_transfer(&self, account: &Account, message: &str) {
        tracing::info!(account_id = %account.id, "Sending transfer notification: {}", message);
    }
}

/// Discards every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

#[async_trait]
impl Notifier for NoopNotifier {
    async fn notify_about_transfer(&self, _account: &Account, _message: &str) {}
}
