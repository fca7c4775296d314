//! In-memory banking ledger: customers, checking accounts, deposits and
//! withdrawals with a per-account history, driven by a text menu.

pub mod bank;
pub mod config;
pub mod domain;
pub mod engine;
pub mod ingestion;
pub mod logging;
pub mod report;

pub use bank::Bank;
pub use config::LedgerConfig;
pub use engine::Engine;
