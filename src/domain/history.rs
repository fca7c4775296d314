use chrono::{DateTime, Local};
use tracing::debug;

use crate::domain::{Money, TransactionKind};

pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// One successfully applied transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    kind: TransactionKind,
    amount: Money,
    timestamp: DateTime<Local>,
}

impl HistoryEntry {
    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }
}

/// Append-only log of the transactions applied to one account.
#[derive(Debug, Default, Clone)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn record(&mut self, kind: TransactionKind, amount: Money) {
        debug!(%kind, %amount, "history entry recorded");
        self.entries.push(HistoryEntry {
            kind,
            amount,
            timestamp: Local::now(),
        });
    }

    /// Entries in the order they were recorded.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count(&self, kind: TransactionKind) -> usize {
        self.entries.iter().filter(|e| e.kind == kind).count()
    }
}
