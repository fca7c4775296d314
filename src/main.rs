use std::io;

use tracing::info;

use bank_ledger::ingestion::LineReader;
use bank_ledger::report::ConsoleReporter;
use bank_ledger::{Bank, Engine, LedgerConfig, logging};

#[tokio::main(flavor = "current_thread")] // one operator, one thread
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_tracing();

    let config = LedgerConfig::default();
    info!(branch = %config.branch_code, "ledger started");

    // Set up the components
    let input = LineReader::new(tokio::io::stdin());
    let reporter = ConsoleReporter::new(io::stdout(), config.currency_symbol.clone());
    let mut bank = Bank::new(config);

    let mut engine = Engine::new(input, reporter);
    engine.process(&mut bank).await?;

    Ok(())
}
