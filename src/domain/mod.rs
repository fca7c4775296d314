pub mod account;
pub mod customer;
pub mod error;
pub mod history;
pub mod money;
pub mod traits;
pub mod transaction;

pub use account::{Account, AccountNumber, WithdrawalPolicy};
pub use customer::{Customer, TaxId};
pub use error::Error;
pub use history::History;
pub use money::Money;
pub use traits::{LineSource, Reporter};
pub use transaction::{Transaction, TransactionKind};
