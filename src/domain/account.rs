use tracing::warn;

use crate::config::LedgerConfig;
use crate::domain::{Customer, Error, History, Money, TaxId, TransactionKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountNumber(pub u32);

impl core::fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Extra checks run before the balance check of a withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawalPolicy {
    Unrestricted,
    /// Checking account rules. `max_withdrawals` caps the withdrawals recorded
    /// over the whole life of the account; there is no period rollover.
    Limited { limit: Money, max_withdrawals: usize },
}

impl WithdrawalPolicy {
    pub fn checking(config: &LedgerConfig) -> Self {
        WithdrawalPolicy::Limited {
            limit: config.withdrawal_limit,
            max_withdrawals: config.max_withdrawals,
        }
    }

    fn authorize(&self, amount: Money, history: &History) -> Result<(), Error> {
        match *self {
            WithdrawalPolicy::Unrestricted => Ok(()),
            WithdrawalPolicy::Limited {
                limit,
                max_withdrawals,
            } => {
                if amount > limit {
                    return Err(Error::LimitExceeded { amount, limit });
                }

                if history.count(TransactionKind::Withdrawal) >= max_withdrawals {
                    return Err(Error::WithdrawalCountExceeded {
                        max: max_withdrawals,
                    });
                }

                Ok(())
            }
        }
    }
}

#[derive(Debug)]
pub struct Account {
    number: AccountNumber,
    branch_code: String,
    balance: Money,
    owner: TaxId, // lookup key into the bank's customers
    policy: WithdrawalPolicy,
    history: History,
}

impl Account {
    pub fn open(
        owner: &Customer,
        number: AccountNumber,
        branch_code: impl Into<String>,
        policy: WithdrawalPolicy,
    ) -> Self {
        Self {
            number,
            branch_code: branch_code.into(),
            balance: Money::ZERO,
            owner: owner.tax_id().clone(),
            policy,
            history: History::new(),
        }
    }

    /// Checking account with the configured limit and withdrawal cap.
    pub fn checking(owner: &Customer, number: AccountNumber, config: &LedgerConfig) -> Self {
        Self::open(
            owner,
            number,
            config.branch_code.clone(),
            WithdrawalPolicy::checking(config),
        )
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn branch_code(&self) -> &str {
        &self.branch_code
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn owner(&self) -> &TaxId {
        &self.owner
    }

    pub fn policy(&self) -> WithdrawalPolicy {
        self.policy
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub(crate) fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    pub fn deposit(&mut self, amount: Money) -> Result<(), Error> {
        if !amount.is_positive() {
            warn!(account = %self.number, %amount, "deposit rejected");
            return Err(Error::InvalidAmount(amount));
        }

        self.balance = match self.balance.checked_add(amount) {
            Some(balance) => balance,
            None => {
                warn!(account = %self.number, %amount, balance = %self.balance, "deposit would overflow");
                return Err(Error::BalanceOverflow {
                    amount,
                    balance: self.balance,
                });
            }
        };
        Ok(())
    }

    pub fn withdraw(&mut self, amount: Money) -> Result<(), Error> {
        if let Err(e) = self.policy.authorize(amount, &self.history) {
            warn!(account = %self.number, %amount, error = %e, "withdrawal rejected by policy");
            return Err(e);
        }

        if amount > self.balance {
            warn!(account = %self.number, %amount, balance = %self.balance, "insufficient funds");
            return Err(Error::InsufficientFunds {
                requested: amount,
                balance: self.balance,
            });
        }

        if !amount.is_positive() {
            warn!(account = %self.number, %amount, "withdrawal rejected");
            return Err(Error::InvalidAmount(amount));
        }

        self.balance -= amount;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Account, AccountNumber, WithdrawalPolicy};
    use crate::config::LedgerConfig;
    use crate::domain::{Customer, Error, Money, TaxId, Transaction};
    use rust_decimal_macros::dec;

    fn customer() -> Customer {
        Customer::individual("Ana Souza", "01-01-1990", TaxId::from("111"), "Rua A, 1")
    }

    fn plain() -> Account {
        Account::open(&customer(), AccountNumber(1), "0001", WithdrawalPolicy::Unrestricted)
    }

    fn checking() -> Account {
        Account::checking(&customer(), AccountNumber(1), &LedgerConfig::default())
    }

    #[test]
    fn opens_empty_with_back_reference() {
        let account = checking();
        assert_eq!(account.number(), AccountNumber(1));
        assert_eq!(account.branch_code(), "0001");
        assert_eq!(account.balance(), Money::ZERO);
        assert_eq!(account.owner(), &TaxId::from("111"));
        assert!(account.history().is_empty());
        assert_eq!(
            account.policy(),
            WithdrawalPolicy::Limited {
                limit: Money::from(500),
                max_withdrawals: 3
            }
        );
    }

    #[test]
    fn deposit_rejects_non_positive_amounts() {
        let mut account = plain();
        assert!(matches!(account.deposit(Money::ZERO), Err(Error::InvalidAmount(_))));
        assert!(matches!(account.deposit(Money::from(-5)), Err(Error::InvalidAmount(_))));
        assert_eq!(account.balance(), Money::ZERO);

        account.deposit(Money::new(dec!(10.25))).unwrap();
        assert_eq!(account.balance(), Money::new(dec!(10.25)));
    }

    #[test]
    fn deposit_overflow_is_rejected() {
        let mut account = plain();
        let max = Money::parse("79228162514264337593543950335").unwrap();
        Transaction::deposit(max).register_on(&mut account).unwrap();

        let result = Transaction::deposit(max).register_on(&mut account);
        assert!(matches!(result, Err(Error::BalanceOverflow { .. })));
        assert_eq!(account.balance(), max);
        assert_eq!(account.history().entries().len(), 1);

        account.withdraw(Money::from(1)).unwrap();
        Transaction::deposit(Money::from(1)).register_on(&mut account).unwrap();
        assert_eq!(account.balance(), max);
    }

    #[test]
    fn withdraw_checks_funds_before_sign() {
        let mut account = plain();
        account.deposit(Money::from(50)).unwrap();

        assert!(matches!(
            account.withdraw(Money::from(51)),
            Err(Error::InsufficientFunds { .. })
        ));
        assert!(matches!(account.withdraw(Money::ZERO), Err(Error::InvalidAmount(_))));
        assert!(matches!(account.withdraw(Money::from(-1)), Err(Error::InvalidAmount(_))));
        assert_eq!(account.balance(), Money::from(50));

        account.withdraw(Money::from(50)).unwrap();
        assert_eq!(account.balance(), Money::ZERO);
    }

    #[test]
    fn zero_withdrawal_on_empty_account_is_invalid_amount() {
        let mut account = plain();
        assert!(matches!(account.withdraw(Money::ZERO), Err(Error::InvalidAmount(_))));
    }

    #[test]
    fn checking_limit_comes_first() {
        let mut account = checking();
        let result = account.withdraw(Money::from(600));
        assert!(matches!(result, Err(Error::LimitExceeded { .. })));
    }

    #[test]
    fn checking_cap_applies_regardless_of_balance() {
        let mut account = checking();
        Transaction::deposit(Money::from(1000)).register_on(&mut account).unwrap();
        for _ in 0..3 {
            Transaction::withdrawal(Money::from(10)).register_on(&mut account).unwrap();
        }

        let result = Transaction::withdrawal(Money::from(10)).register_on(&mut account);
        assert!(matches!(result, Err(Error::WithdrawalCountExceeded { max: 3 })));
        assert_eq!(account.balance(), Money::from(970));
    }

    #[test]
    fn checking_cap_counts_only_recorded_withdrawals() {
        let mut account = checking();
        Transaction::deposit(Money::from(100)).register_on(&mut account).unwrap();

        for _ in 0..5 {
            let result = Transaction::withdrawal(Money::from(200)).register_on(&mut account);
            assert!(matches!(result, Err(Error::InsufficientFunds { .. })));
        }

        Transaction::withdrawal(Money::from(100)).register_on(&mut account).unwrap();
        assert_eq!(account.balance(), Money::ZERO);
    }

    #[test]
    fn balance_is_conserved_and_never_negative() {
        let mut account = checking();
        let operations = [
            Transaction::deposit(Money::from(300)),
            Transaction::withdrawal(Money::from(400)),
            Transaction::deposit(Money::new(dec!(-2))),
            Transaction::withdrawal(Money::new(dec!(120.50))),
            Transaction::deposit(Money::new(dec!(0.75))),
            Transaction::withdrawal(Money::from(501)),
            Transaction::withdrawal(Money::from(180)),
            Transaction::withdrawal(Money::from(1)),
            Transaction::withdrawal(Money::from(1)),
        ];

        let mut expected = Money::ZERO;
        for tx in operations {
            let before = account.balance();
            let history_before = account.history().entries().len();
            match tx.register_on(&mut account) {
                Ok(()) => {
                    match tx {
                        Transaction::Deposit { amount } => {
                            expected = expected.checked_add(amount).unwrap()
                        }
                        Transaction::Withdrawal { amount } => expected -= amount,
                    }
                    assert_eq!(account.history().entries().len(), history_before + 1);
                }
                Err(_) => {
                    assert_eq!(account.balance(), before);
                    assert_eq!(account.history().entries().len(), history_before);
                }
            }
            assert!(account.balance() >= Money::ZERO);
            assert_eq!(account.balance(), expected);
        }
        assert_eq!(account.balance(), Money::new(dec!(0.25)));
    }
}
