use futures::{Stream, StreamExt};
use tracing::{debug, info};

use crate::bank::Bank;
use crate::domain::{
    AccountNumber, Customer, Error, Money, TaxId, Transaction, TransactionKind,
    traits::{LineSource, Reporter},
};

/// Interactive session: reads menu choices and runs the matching flow against
/// the bank until the operator quits or input runs out.
pub struct Engine<S, R>
where
    S: Stream<Item = Result<String, Error>> + Unpin,
    R: Reporter,
{
    lines: S,
    reporter: R,
}

enum Flow {
    Continue,
    Quit,
}

impl<S, R> Engine<S, R>
where
    S: Stream<Item = Result<String, Error>> + Unpin,
    R: Reporter,
{
    pub fn new<I>(mut input: I, reporter: R) -> Self
    where
        I: LineSource<Lines = S>,
    {
        Self {
            lines: input.lines(),
            reporter,
        }
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }

    pub async fn process(&mut self, bank: &mut Bank) -> Result<(), Error> {
        loop {
            self.reporter.menu()?;

            let choice = match self.lines.next().await {
                Some(line) => line?,
                None => break,
            };

            match self.dispatch(choice.trim(), bank).await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(Error::EndOfInput) => break,
                Err(e @ Error::IO(_)) => return Err(e),
                Err(e) => self.reporter.failure(&e)?,
            }
        }

        info!(
            customers = bank.customers().len(),
            accounts = bank.accounts().len(),
            "session closed"
        );
        Ok(())
    }

    async fn dispatch(&mut self, choice: &str, bank: &mut Bank) -> Result<Flow, Error> {
        debug!(choice, "menu option selected");

        match choice {
            "d" => self.transact(bank, TransactionKind::Deposit).await?,
            "s" => self.transact(bank, TransactionKind::Withdrawal).await?,
            "e" => self.statement(bank).await?,
            "nc" => self.create_account(bank).await?,
            "lc" => self.list_accounts(bank)?,
            "nu" => self.create_customer(bank).await?,
            "q" => return Ok(Flow::Quit),
            other => return Err(Error::InvalidOption(other.to_string())),
        }

        Ok(Flow::Continue)
    }

    async fn ask(&mut self, label: &str) -> Result<String, Error> {
        self.reporter.prompt(label)?;
        match self.lines.next().await {
            Some(line) => Ok(line?.trim().to_string()),
            None => Err(Error::EndOfInput),
        }
    }

    /// Like `ask`, but blank answers are rejected.
    async fn ask_required(&mut self, label: &str) -> Result<String, Error> {
        let answer = self.ask(label).await?;
        if answer.is_empty() {
            return Err(Error::Ingestion(format!("{} must not be empty", label)));
        }
        Ok(answer)
    }

    async fn ask_tax_id(&mut self) -> Result<TaxId, Error> {
        Ok(TaxId::from(self.ask_required("Customer tax id").await?))
    }

    /// Finds the customer's account, asking for its number when there is more
    /// than one to choose from.
    async fn select_account(&mut self, bank: &Bank, tax_id: &TaxId) -> Result<AccountNumber, Error> {
        let owned = bank.customer(tax_id)?.accounts().len();

        let chosen = if owned > 1 {
            let raw = self.ask("Customer account number").await?;
            let number = raw
                .parse::<u32>()
                .map_err(|_| Error::Ingestion(format!("`{}` is not a valid account number", raw)))?;
            Some(AccountNumber(number))
        } else {
            None
        };

        bank.resolve_account(tax_id, chosen)
    }

    async fn transact(&mut self, bank: &mut Bank, kind: TransactionKind) -> Result<(), Error> {
        let tax_id = self.ask_tax_id().await?;
        let number = self.select_account(bank, &tax_id).await?;

        let (label, done) = match kind {
            TransactionKind::Deposit => ("Deposit amount", "Deposit completed successfully!"),
            TransactionKind::Withdrawal => ("Withdrawal amount", "Withdrawal completed successfully!"),
        };
        let amount = Money::parse(&self.ask(label).await?)?;
        let transaction = match kind {
            TransactionKind::Deposit => Transaction::deposit(amount),
            TransactionKind::Withdrawal => Transaction::withdrawal(amount),
        };

        bank.perform(&tax_id, number, &transaction)?;
        self.reporter.success(done)
    }

    async fn statement(&mut self, bank: &Bank) -> Result<(), Error> {
        let tax_id = self.ask_tax_id().await?;
        let number = self.select_account(bank, &tax_id).await?;

        match bank.account(number) {
            Some(account) => self.reporter.statement(account),
            None => Err(Error::AccountNotOwnedByCustomer { tax_id, number }),
        }
    }

    async fn create_customer(&mut self, bank: &mut Bank) -> Result<(), Error> {
        let tax_id = TaxId::from(self.ask_required("Tax id (numbers only)").await?);

        if bank.find_customer(&tax_id).is_some() {
            return Err(Error::DuplicateCustomer(tax_id));
        }

        let full_name = self.ask_required("Full name").await?;
        let birth_date = self.ask_required("Birth date (dd-mm-yyyy)").await?;
        let address = self
            .ask_required("Address (street, number - district - city/state)")
            .await?;

        bank.create_customer(Customer::individual(full_name, birth_date, tax_id, address))?;
        self.reporter.success("Customer created successfully!")
    }

    async fn create_account(&mut self, bank: &mut Bank) -> Result<(), Error> {
        let tax_id = self.ask_tax_id().await?;
        let number = bank.open_checking_account(&tax_id)?;

        self.reporter
            .success(&format!("Account {} created successfully!", number))
    }

    fn list_accounts(&mut self, bank: &Bank) -> Result<(), Error> {
        if bank.accounts().is_empty() {
            return self.reporter.notice("No accounts registered.");
        }

        for account in bank.accounts() {
            let holder = bank.customer(account.owner())?;
            self.reporter.account_summary(account, holder)?;
        }

        Ok(())
    }
}
