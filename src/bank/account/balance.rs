use crate::bank::Amount;

use super::account::AccountError;
use rust_decimal_macros::dec;

/// Running totals of an account: credits (deposits) and debits (withdrawals).
///
/// The balance itself is always credit - debit, i.e. the sum of all
/// movements. Keeping both halves around means the summary's "in" and "out"
/// come for free, and every append is overflow-checked once, here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Balance {
    credit: Amount,
    debit: Amount,
}

impl Balance {
    pub const fn new(credit: Amount, debit: Amount) -> Self {
        Self { credit, debit }
    }

    pub fn amount(&self) -> Amount {
        self.credit - self.debit
    }

    /// Total of the positive movements.
    pub fn credit(&self) -> Amount {
        self.credit
    }

    /// Absolute total of the negative movements.
    pub fn debit(&self) -> Amount {
        self.debit
    }

    /// Account for a signed movement: deposits go to the credit side,
    /// withdrawals (as their absolute value) to the debit side.
    pub fn record(&mut self, amount: Amount) -> Result<(), AccountError> {
        if amount > dec!(0) {
            self.credit = self
                .credit
                .checked_add(amount)
                .ok_or(AccountError::Overflow)?;
        } else {
            self.debit = self
                .debit
                .checked_add(amount.abs())
                .ok_or(AccountError::Overflow)?;
        }

        Ok(())
    }
}

impl Default for Balance {
    fn default() -> Self {
        Self::new(dec!(0), dec!(0))
    }
}
