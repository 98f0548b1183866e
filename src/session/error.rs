use super::auth::AuthRejection;
use crate::bank::account::loan::LoanRejection;
use crate::bank::transfer::TransferRejection;

use thiserror::Error;

/// A user action that didn't go through.
///
/// The `Display` text is the alert shown to the user. It doesn't say
/// what went wrong; the underlying reason is available through `source()`
/// for logs.
#[derive(Debug, PartialEq, Error)]
pub enum ActionError {
    /// Only logging in is possible while logged out.
    #[error("Log in to get started")]
    NotLoggedIn,

    #[error("Username or password is not correct")]
    LoginRejected(#[source] AuthRejection),

    #[error("Receiver can not receive that amount")]
    TransferRejected(#[from] TransferRejection),

    #[error("You can not get that amount of loan")]
    LoanRejected(#[from] LoanRejection),

    #[error("Username or pin is not correct")]
    CloseRejected(#[source] AuthRejection),
}

impl ActionError {
    /// The detailed reason, for logs. Empty when there is nothing more to say.
    pub fn reason(&self) -> String {
        std::error::Error::source(self)
            .map(|source| source.to_string())
            .unwrap_or_default()
    }
}

#[test]
fn test_alerts_hide_the_reason() {
    for (err, want_alert, want_reason) in vec![
        (
            ActionError::LoginRejected(AuthRejection::UnknownUser("xx".to_string())),
            "Username or password is not correct",
            "no account named \"xx\"",
        ),
        (
            ActionError::LoginRejected(AuthRejection::WrongPin),
            "Username or password is not correct",
            "wrong pin",
        ),
        (
            ActionError::TransferRejected(TransferRejection::SelfTransfer),
            "Receiver can not receive that amount",
            "cannot transfer to the same account",
        ),
        (
            ActionError::LoanRejected(LoanRejection::InvalidAmount),
            "You can not get that amount of loan",
            "the loan amount must be positive",
        ),
        (ActionError::NotLoggedIn, "Log in to get started", ""),
    ] {
        assert_eq!(want_alert, err.to_string());
        assert_eq!(want_reason, err.reason());
    }
}
