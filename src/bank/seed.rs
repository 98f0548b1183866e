//! Opening accounts: the built-in demo accounts, or accounts read from a JSON
//! fixture file.

use super::{Account, AccountError, AccountStore, Amount, Pin};
use crate::format::{Currency, Locale};

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

const DEMO_ACCOUNTS: &str = include_str!("demo_accounts.json");

#[derive(Debug, Error)]
pub enum Error {
    /// The JSON is malformed, or doesn't have the expected shape.
    #[error("malformed accounts file: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON is well formed, but an account in it makes no sense.
    #[error("invalid account {owner:?}: {reason}")]
    Format { owner: String, reason: String },
}

// I have an AccountRecord type because the file format and the domain type
// don't line up: the file keeps movements and their dates in two parallel
// lists (it is the format the bank has always used), while an Account keeps
// each amount with its date.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRecord {
    owner: String,
    movements: Vec<Amount>,
    movements_dates: Vec<DateTime<Utc>>,
    interest_rate: Amount,
    pin: Pin,
    currency: String,
    locale: String,
}

impl TryFrom<AccountRecord> for Account {
    type Error = Error;

    fn try_from(record: AccountRecord) -> Result<Self, Self::Error> {
        let invalid = |reason: String| Error::Format {
            owner: record.owner.clone(),
            reason,
        };

        if record.movements.len() != record.movements_dates.len() {
            return Err(invalid(format!(
                "{} movements but {} movement dates",
                record.movements.len(),
                record.movements_dates.len()
            )));
        }
        let currency: Currency = record
            .currency
            .parse()
            .map_err(|err: crate::format::UnknownCurrency| invalid(err.to_string()))?;
        let locale: Locale = record
            .locale
            .parse()
            .map_err(|err: crate::format::UnknownLocale| invalid(err.to_string()))?;

        let mut account = Account::new(
            record.owner.as_str(),
            record.pin,
            record.interest_rate,
            currency,
            locale,
        );
        for (amount, date) in record.movements.iter().zip(record.movements_dates.iter()) {
            account
                .push_movement(*amount, *date)
                .map_err(|err: AccountError| invalid(err.to_string()))?;
        }

        Ok(account)
    }
}

/// Read a list of accounts from JSON, in the order they appear.
pub fn load(input: impl std::io::Read) -> Result<AccountStore, Error> {
    let records: Vec<AccountRecord> = serde_json::from_reader(input)?;

    let accounts = records
        .into_iter()
        .map(Account::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(AccountStore::new(accounts))
}

/// The two accounts the demo bank opens with: John Smith (js / 1111, EUR)
/// and Jessica Davis (jd / 2222, USD).
pub fn demo_accounts() -> Result<AccountStore, Error> {
    load(DEMO_ACCOUNTS.as_bytes())
}
