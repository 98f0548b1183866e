use bankist::{config::Cli, run::run, session::Session};

use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr: stdout is the screen.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bankist=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let store = cli.open_accounts()?;
    tracing::info!(accounts = store.len(), "bank open");

    let session = Session::new(store, cli.session_config());
    run(std::io::stdin(), std::io::stdout(), session)?;

    Ok(())
}
