//! Command line configuration.

use crate::bank::{seed, AccountStore};
use crate::session::{SessionConfig, LOAN_DELAY_MILLISECONDS, LOGOUT_AFTER_SECONDS};

use chrono::Duration;
use clap::Parser;
use std::fs::File;
use std::path::PathBuf;
use thiserror::Error;

const MAX_LOAN_DELAY_MILLISECONDS: i64 = 24 * 60 * 60 * 1000;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Seed(#[from] seed::Error),
}

#[derive(Parser, Debug)]
#[command(name = "bankist", version, about = "A demo bank, in your terminal")]
pub struct Cli {
    /// JSON file with the accounts to open (the two demo accounts by default)
    #[arg(short = 'a', long = "accounts")]
    pub accounts: Option<PathBuf>,

    /// Seconds without activity before being logged out
    #[arg(long = "logout-after", default_value_t = LOGOUT_AFTER_SECONDS)]
    pub logout_after: u32,

    /// Milliseconds between a loan being approved and being paid (a day at most)
    #[arg(
        long = "loan-delay-ms",
        default_value_t = LOAN_DELAY_MILLISECONDS,
        value_parser = clap::value_parser!(i64).range(0..=MAX_LOAN_DELAY_MILLISECONDS)
    )]
    pub loan_delay_ms: i64,
}

impl Cli {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            logout_after: self.logout_after,
            loan_delay: Duration::milliseconds(self.loan_delay_ms),
            ..SessionConfig::default()
        }
    }

    pub fn open_accounts(&self) -> Result<AccountStore, Error> {
        match &self.accounts {
            Some(path) => {
                let file = File::open(path).map_err(|source| Error::Io {
                    path: path.clone(),
                    source,
                })?;
                Ok(seed::load(std::io::BufReader::new(file))?)
            }
            None => Ok(seed::demo_accounts()?),
        }
    }
}
