use tracing::info;

use crate::config::LedgerConfig;
use crate::domain::{Account, AccountNumber, Customer, Error, TaxId, Transaction};

/// In-memory registry of customers and accounts. Lives for the whole session
/// and is handed by reference to every operation.
#[derive(Debug, Default)]
pub struct Bank {
    config: LedgerConfig,
    customers: Vec<Customer>,
    accounts: Vec<Account>,
}

impl Bank {
    pub fn new(config: LedgerConfig) -> Self {
        Self {
            config,
            customers: Vec::new(),
            accounts: Vec::new(),
        }
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// First customer with the given tax id, by linear scan.
    pub fn find_customer(&self, tax_id: &TaxId) -> Option<&Customer> {
        self.customers.iter().find(|c| c.tax_id() == tax_id)
    }

    pub fn customer(&self, tax_id: &TaxId) -> Result<&Customer, Error> {
        self.find_customer(tax_id)
            .ok_or_else(|| Error::CustomerNotFound(tax_id.clone()))
    }

    pub fn account(&self, number: AccountNumber) -> Option<&Account> {
        self.accounts.iter().find(|a| a.number() == number)
    }

    pub fn create_customer(&mut self, customer: Customer) -> Result<&Customer, Error> {
        if self.find_customer(customer.tax_id()).is_some() {
            return Err(Error::DuplicateCustomer(customer.tax_id().clone()));
        }

        info!(customer = %customer.tax_id(), "customer created");
        self.customers.push(customer);
        Ok(&self.customers[self.customers.len() - 1])
    }

    pub fn next_account_number(&self) -> AccountNumber {
        AccountNumber(self.accounts.len() as u32 + 1)
    }

    /// Opens a checking account with the configured defaults and links it to
    /// its owner.
    pub fn open_checking_account(&mut self, tax_id: &TaxId) -> Result<AccountNumber, Error> {
        let number = self.next_account_number();
        let customer = self
            .customers
            .iter_mut()
            .find(|c| c.tax_id() == tax_id)
            .ok_or_else(|| Error::CustomerNotFound(tax_id.clone()))?;

        let account = Account::checking(customer, number, &self.config);
        customer.add_account(number);
        self.accounts.push(account);

        info!(customer = %tax_id, account = %number, "checking account opened");
        Ok(number)
    }

    /// Picks the customer's account. A sole account is returned as is;
    /// with several, `chosen` must name one of them.
    pub fn resolve_account(
        &self,
        tax_id: &TaxId,
        chosen: Option<AccountNumber>,
    ) -> Result<AccountNumber, Error> {
        let customer = self.customer(tax_id)?;

        match customer.accounts() {
            [] => Err(Error::NoAccountForCustomer(tax_id.clone())),
            [only] => Ok(*only),
            owned => chosen.filter(|n| owned.contains(n)).ok_or_else(|| {
                Error::AccountNotOwnedByCustomer {
                    tax_id: tax_id.clone(),
                    // 0 is never assigned, it stands for "no choice made"
                    number: chosen.unwrap_or(AccountNumber(0)),
                }
            }),
        }
    }

    /// Runs `transaction` on one of the customer's accounts through the
    /// customer.
    pub fn perform(
        &mut self,
        tax_id: &TaxId,
        number: AccountNumber,
        transaction: &Transaction,
    ) -> Result<(), Error> {
        let customer = self
            .customers
            .iter()
            .find(|c| c.tax_id() == tax_id)
            .ok_or_else(|| Error::CustomerNotFound(tax_id.clone()))?;

        let not_owned = || Error::AccountNotOwnedByCustomer {
            tax_id: tax_id.clone(),
            number,
        };

        if !customer.owns(number) {
            return Err(not_owned());
        }

        let account = self
            .accounts
            .iter_mut()
            .find(|a| a.number() == number)
            .ok_or_else(not_owned)?;

        customer.perform_transaction(account, transaction)
    }
}
