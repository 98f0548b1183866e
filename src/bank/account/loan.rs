use crate::bank::Amount;

use super::account::Account;
use rust_decimal_macros::dec;
use thiserror::Error;

/// A loan is granted when at least one movement is worth this share of the
/// requested amount.
pub const LOAN_COLLATERAL_RATIO: Amount = dec!(0.1);

#[derive(Debug, PartialEq, Error)]
pub enum LoanRejection {
    /// The requested amount, once floored, is zero or negative.
    #[error("the loan amount must be positive")]
    InvalidAmount,

    /// No movement is worth at least 10% of the requested amount.
    #[error("no movement covers {required}")]
    NoQualifyingMovement { required: Amount },

    /// The payment date can't be represented.
    #[error("the loan can't be paid that far in the future")]
    PaymentOutOfRange,
}

impl Account {
    /// Check whether the bank grants a loan of `requested`, and return the
    /// amount it would grant: the requested amount rounded down to a whole
    /// unit.
    pub fn loan_eligibility(&self, requested: Amount) -> Result<Amount, LoanRejection> {
        let amount = requested.floor();
        if amount <= dec!(0) {
            return Err(LoanRejection::InvalidAmount);
        }

        let required = amount * LOAN_COLLATERAL_RATIO;
        if !self.movements().iter().any(|mov| mov.amount >= required) {
            return Err(LoanRejection::NoQualifyingMovement { required });
        }

        Ok(amount)
    }
}
