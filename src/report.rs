use std::io::Write;

use colored::Colorize;
use tracing::warn;

use crate::domain::account::WithdrawalPolicy;
use crate::domain::history::TIMESTAMP_FORMAT;
use crate::domain::{Account, Customer, Error, Money, Reporter, TransactionKind};

pub const MENU: &str = "
========== Menu ==========
[d]\tDeposit
[s]\tWithdraw
[e]\tStatement
[nc]\tNew account
[lc]\tList accounts
[nu]\tNew customer
[q]\tQuit
=> ";

/// Writes menus, prompts and outcomes to a terminal-like writer.
#[derive(Debug)]
pub struct ConsoleReporter<W: Write> {
    out: W,
    currency: String,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, currency: impl Into<String>) -> Self {
        Self {
            out,
            currency: currency.into(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn money(&self, amount: Money) -> String {
        format!("{} {}", self.currency, amount)
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn menu(&mut self) -> Result<(), Error> {
        write!(self.out, "{}", MENU)?;
        self.out.flush()?;
        Ok(())
    }

    fn prompt(&mut self, label: &str) -> Result<(), Error> {
        write!(self.out, "{}: ", label)?;
        self.out.flush()?;
        Ok(())
    }

    fn success(&mut self, message: &str) -> Result<(), Error> {
        writeln!(self.out, "\n{}", format!("=== {} ===", message).green())?;
        Ok(())
    }

    fn failure(&mut self, error: &Error) -> Result<(), Error> {
        warn!(%error, "operation failed");
        let text = match error {
            Error::InvalidOption(_) => error.to_string(),
            _ => format!("@@@ Operation failed! {} @@@", error),
        };
        writeln!(self.out, "\n{}", text.yellow())?;
        Ok(())
    }

    fn statement(&mut self, account: &Account) -> Result<(), Error> {
        writeln!(self.out, "\n=========== STATEMENT ===========")?;

        let history = account.history();
        if history.is_empty() {
            writeln!(self.out, "{}", "No transactions were made.".yellow())?;
        }

        for entry in history.entries() {
            let line = format!(
                "\n{} on {}:\n\t{}",
                entry.kind(),
                entry.timestamp().format(TIMESTAMP_FORMAT),
                self.money(entry.amount())
            );
            let line = match entry.kind() {
                TransactionKind::Withdrawal => line.red(),
                TransactionKind::Deposit => line.green(),
            };
            writeln!(self.out, "{}", line)?;
        }

        let balance = format!("\nBalance:\n\t{}\n", self.money(account.balance()));
        writeln!(self.out, "{}", balance.black().on_white().bold())?;
        writeln!(self.out, "=================================")?;
        Ok(())
    }

    fn account_summary(&mut self, account: &Account, holder: &Customer) -> Result<(), Error> {
        let rules = match account.policy() {
            WithdrawalPolicy::Unrestricted => "no withdrawal restrictions".to_string(),
            WithdrawalPolicy::Limited {
                limit,
                max_withdrawals,
            } => format!(
                "up to {} per withdrawal, {} withdrawals",
                self.money(limit),
                max_withdrawals
            ),
        };

        writeln!(self.out, "{}", "=".repeat(100))?;
        writeln!(
            self.out,
            "\tBranch:\t\t{}\n\tAccount:\t{}\n\tRules:\t\t{}\n\tHolder:\t\t{} (born {})\n\tAddress:\t{}",
            account.branch_code(),
            account.number(),
            rules,
            holder.full_name(),
            holder.birth_date(),
            holder.address()
        )?;
        Ok(())
    }

    fn notice(&mut self, message: &str) -> Result<(), Error> {
        writeln!(self.out, "\n{}", message.yellow())?;
        Ok(())
    }
}
