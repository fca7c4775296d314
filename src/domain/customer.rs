use tracing::debug;

use crate::domain::{Account, AccountNumber, Error, Transaction};

/// National tax identifier, unique per customer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaxId(String);

impl From<&str> for TaxId {
    fn from(value: &str) -> Self {
        Self(value.trim().to_string())
    }
}

impl From<String> for TaxId {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl core::fmt::Display for TaxId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    pub full_name: String,
    pub birth_date: String, // kept as typed, never parsed
    pub tax_id: TaxId,
}

#[derive(Debug, Clone)]
pub struct Customer {
    address: String,
    accounts: Vec<AccountNumber>,
    individual: Individual,
}

impl Customer {
    pub fn individual(
        full_name: impl Into<String>,
        birth_date: impl Into<String>,
        tax_id: TaxId,
        address: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            accounts: Vec::new(),
            individual: Individual {
                full_name: full_name.into(),
                birth_date: birth_date.into(),
                tax_id,
            },
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn full_name(&self) -> &str {
        &self.individual.full_name
    }

    pub fn birth_date(&self) -> &str {
        &self.individual.birth_date
    }

    pub fn tax_id(&self) -> &TaxId {
        &self.individual.tax_id
    }

    /// Owned accounts in the order they were added.
    pub fn accounts(&self) -> &[AccountNumber] {
        &self.accounts
    }

    pub fn owns(&self, number: AccountNumber) -> bool {
        self.accounts.contains(&number)
    }

    pub fn add_account(&mut self, number: AccountNumber) {
        self.accounts.push(number);
    }

    /// Hook point for per-customer authorization; today it only forwards.
    pub fn perform_transaction(
        &self,
        account: &mut Account,
        transaction: &Transaction,
    ) -> Result<(), Error> {
        debug!(customer = %self.tax_id(), account = %account.number(), %transaction, "performing transaction");
        transaction.register_on(account)
    }
}

#[cfg(test)]
mod tests {
    use super::{Customer, TaxId};
    use crate::domain::account::WithdrawalPolicy;
    use crate::domain::{Account, AccountNumber, Money, Transaction};

    #[test]
    fn tax_id_is_trimmed() {
        assert_eq!(TaxId::from(" 111 "), TaxId::from("111"));
        assert_eq!(TaxId::from("111".to_string()).to_string(), "111");
    }

    #[test]
    fn accounts_keep_insertion_order() {
        let mut customer = Customer::individual("Ana", "01-01-1990", TaxId::from("111"), "Rua A");
        customer.add_account(AccountNumber(3));
        customer.add_account(AccountNumber(1));

        assert_eq!(customer.accounts(), &[AccountNumber(3), AccountNumber(1)]);
        assert!(customer.owns(AccountNumber(1)));
        assert!(!customer.owns(AccountNumber(2)));
        assert_eq!(customer.full_name(), "Ana");
        assert_eq!(customer.birth_date(), "01-01-1990");
        assert_eq!(customer.address(), "Rua A");
    }

    #[test]
    fn perform_transaction_registers_on_account() {
        let customer = Customer::individual("Ana", "01-01-1990", TaxId::from("111"), "Rua A");
        let mut account =
            Account::open(&customer, AccountNumber(1), "0001", WithdrawalPolicy::Unrestricted);

        customer
            .perform_transaction(&mut account, &Transaction::deposit(Money::from(40)))
            .unwrap();

        assert_eq!(account.balance(), Money::from(40));
        assert_eq!(account.history().entries().len(), 1);
    }
}
