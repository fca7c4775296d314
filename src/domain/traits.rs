use futures::Stream;

use crate::domain::{Account, Customer, Error};

/// Source of operator input, one line per item.
pub trait LineSource {
    type Lines: Stream<Item = Result<String, Error>> + Send + Unpin + 'static;
    fn lines(&mut self) -> Self::Lines;
}

/// Everything the operator gets to see.
pub trait Reporter {
    fn menu(&mut self) -> Result<(), Error>;

    fn prompt(&mut self, label: &str) -> Result<(), Error>;

    fn success(&mut self, message: &str) -> Result<(), Error>;

    fn failure(&mut self, error: &Error) -> Result<(), Error>;

    fn statement(&mut self, account: &Account) -> Result<(), Error>;

    fn account_summary(&mut self, account: &Account, holder: &Customer) -> Result<(), Error>;

    fn notice(&mut self, message: &str) -> Result<(), Error>;
}
