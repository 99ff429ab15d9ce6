//! Application layer containing the account and transfer orchestration.
//!
//! `AccountsService` is the primary entry point. It owns the storage and
//! notification ports and serialises balance mutation behind a single
//! `tokio::sync::Mutex`.

pub mod accounts_service;
