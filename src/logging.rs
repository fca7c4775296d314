use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "bank_ledger=warn";

/// Installs the global subscriber. `RUST_LOG` overrides the default filter;
/// events go to stderr so they never mix with the menu on stdout.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
