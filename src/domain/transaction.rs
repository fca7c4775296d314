use tracing::info;

use crate::domain::{Account, Error, Money};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl core::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TransactionKind::Deposit => f.write_str("Deposit"),
            TransactionKind::Withdrawal => f.write_str("Withdrawal"),
        }
    }
}

/// A request to move money in or out of an account. Only its effect is kept,
/// as an entry in the account history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    Deposit { amount: Money },
    Withdrawal { amount: Money },
}

impl Transaction {
    pub fn deposit(amount: Money) -> Self {
        Transaction::Deposit { amount }
    }

    pub fn withdrawal(amount: Money) -> Self {
        Transaction::Withdrawal { amount }
    }

    pub fn kind(&self) -> TransactionKind {
        match self {
            Transaction::Deposit { .. } => TransactionKind::Deposit,
            Transaction::Withdrawal { .. } => TransactionKind::Withdrawal,
        }
    }

    pub fn amount(&self) -> Money {
        match *self {
            Transaction::Deposit { amount } | Transaction::Withdrawal { amount } => amount,
        }
    }

    /// Applies the transaction to `account` and records it in the account
    /// history. A rejected transaction leaves no trace.
    pub fn register_on(&self, account: &mut Account) -> Result<(), Error> {
        match *self {
            Transaction::Deposit { amount } => account.deposit(amount)?,
            Transaction::Withdrawal { amount } => account.withdraw(amount)?,
        }

        account.history_mut().record(self.kind(), self.amount());
        info!(account = %account.number(), transaction = %self, balance = %account.balance(), "transaction applied");

        Ok(())
    }
}

impl core::fmt::Display for Transaction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{},amount={}", self.kind(), self.amount())
    }
}
