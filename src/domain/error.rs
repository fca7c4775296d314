use crate::domain::{AccountNumber, Money, TaxId};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error("Ingestion failed with: {0}")]
    Ingestion(String),

    #[error("Input ended before the operation was completed")]
    EndOfInput,

    #[error("Invalid option `{0}`, please select the desired operation again")]
    InvalidOption(String),

    #[error("The amount {0} is invalid")]
    InvalidAmount(Money),

    #[error("Deposit of {amount} would overflow the balance of {balance}")]
    BalanceOverflow { amount: Money, balance: Money },

    #[error("Insufficient funds: requested {requested}, balance is {balance}")]
    InsufficientFunds { requested: Money, balance: Money },

    #[error("Withdrawal of {amount} exceeds the limit of {limit}")]
    LimitExceeded { amount: Money, limit: Money },

    #[error("Maximum number of withdrawals ({max}) exceeded")]
    WithdrawalCountExceeded { max: usize },

    #[error("Customer {0} not found")]
    CustomerNotFound(TaxId),

    #[error("A customer with tax id {0} already exists")]
    DuplicateCustomer(TaxId),

    #[error("Customer {0} has no account")]
    NoAccountForCustomer(TaxId),

    #[error("Account {number} does not belong to customer {tax_id}")]
    AccountNotOwnedByCustomer { tax_id: TaxId, number: AccountNumber },
}
