use super::{AccountError, AccountId, AccountStore, Amount, Username};

use chrono::{DateTime, Utc};
use rust_decimal_macros::dec;
use thiserror::Error;

/// Why a transfer didn't go through.
/// None of these leave a trace on either account.
#[derive(Debug, PartialEq, Error)]
pub enum TransferRejection {
    /// Zero or negative amount.
    #[error("the transfer amount must be positive")]
    InvalidAmount,

    /// No account has the receiver's username.
    #[error("no account named {0:?}")]
    UnknownReceiver(String),

    /// The sender isn't in the store (anymore).
    #[error("the sending account is closed")]
    UnknownSender,

    /// The sender's balance doesn't cover the amount.
    #[error("the balance doesn't cover {0}")]
    NotEnoughFunds(Amount),

    /// Sender and receiver are the same account.
    #[error("cannot transfer to the same account")]
    SelfTransfer,

    /// Either account's totals would overflow.
    #[error(transparent)]
    Account(#[from] AccountError),
}

impl AccountStore {
    /// Move `amount` from the account `from` to the account named `to`.
    /// Both accounts get a movement dated `date`.
    ///
    /// Returns the receiver's id.
    pub fn transfer(
        &mut self,
        from: AccountId,
        to: &Username,
        amount: Amount,
        date: DateTime<Utc>,
    ) -> Result<AccountId, TransferRejection> {
        if amount <= dec!(0) {
            return Err(TransferRejection::InvalidAmount);
        }

        let receiver_id = self
            .find(to)
            .ok_or_else(|| TransferRejection::UnknownReceiver(to.to_string()))?
            .id();

        let sender = self.get(from).ok_or(TransferRejection::UnknownSender)?;
        if amount > sender.balance() {
            return Err(TransferRejection::NotEnoughFunds(amount));
        }

        let (sender, receiver) = self
            .get_pair_mut(from, receiver_id)
            .ok_or(TransferRejection::SelfTransfer)?;

        // Check both sides before touching anything, so a transfer is either
        // fully applied or not applied at all.
        sender.check_movement(-amount)?;
        receiver.check_movement(amount)?;

        sender.push_movement(-amount, date)?;
        receiver.push_movement(amount, date)?;

        Ok(receiver_id)
    }
}
