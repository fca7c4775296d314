use crate::domain::Money;

pub const DEFAULT_BRANCH_CODE: &str = "0001";
pub const DEFAULT_WITHDRAWAL_LIMIT: i64 = 500;
pub const DEFAULT_MAX_WITHDRAWALS: usize = 3;
pub const DEFAULT_CURRENCY_SYMBOL: &str = "R$";

/// Ledger-wide settings, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    pub branch_code: String,
    /// Largest single withdrawal allowed on a checking account.
    pub withdrawal_limit: Money,
    /// Lifetime withdrawal cap of a checking account.
    pub max_withdrawals: usize,
    pub currency_symbol: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            branch_code: DEFAULT_BRANCH_CODE.into(),
            withdrawal_limit: Money::from(DEFAULT_WITHDRAWAL_LIMIT),
            max_withdrawals: DEFAULT_MAX_WITHDRAWALS,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.into(),
        }
    }
}
