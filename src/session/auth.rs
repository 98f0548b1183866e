use crate::bank::{Account, AccountStore, Pin};

use thiserror::Error;

/// What someone typed in a username/pin form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    /// `None` when what was typed isn't a number: such a pin never matches.
    pub pin: Option<Pin>,
}

impl Credentials {
    pub fn new(username: impl Into<String>, pin: &str) -> Self {
        Self {
            username: username.into(),
            pin: pin.trim().parse().ok(),
        }
    }
}

/// Why credentials were turned down.
///
/// The user is never told which one it was: the alert is the same either
/// way. It only shows up in the logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthRejection {
    #[error("no account named {0:?}")]
    UnknownUser(String),

    #[error("wrong pin")]
    WrongPin,

    /// The credentials name an account, but not the one that is logged in.
    #[error("{0:?} is not the logged in account")]
    NotCurrentAccount(String),
}

#[derive(Debug)]
pub enum Authentication<'a> {
    Authenticated(&'a Account),
    Rejected(AuthRejection),
}

/// Find the account the credentials belong to. Username and pin must both
/// match exactly.
pub fn authenticate<'a>(store: &'a AccountStore, credentials: &Credentials) -> Authentication<'a> {
    let account = match store.find(&credentials.username) {
        Some(account) => account,
        None => {
            return Authentication::Rejected(AuthRejection::UnknownUser(
                credentials.username.clone(),
            ))
        }
    };

    match credentials.pin {
        Some(pin) if account.pin_matches(pin) => Authentication::Authenticated(account),
        _ => Authentication::Rejected(AuthRejection::WrongPin),
    }
}

/// Check that the credentials are those of `account` itself.
pub fn confirm(account: &Account, credentials: &Credentials) -> Result<(), AuthRejection> {
    if account.username != credentials.username {
        return Err(AuthRejection::NotCurrentAccount(
            credentials.username.clone(),
        ));
    }

    match credentials.pin {
        Some(pin) if account.has_credentials(&credentials.username, pin) => Ok(()),
        _ => Err(AuthRejection::WrongPin),
    }
}
