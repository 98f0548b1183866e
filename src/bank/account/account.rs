use crate::bank::{AccountId, Amount, Pin, Username};
use crate::format::{Currency, Locale};

use super::balance::Balance;
use super::movement::Movement;
use super::username::derive_username;
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub enum AccountError {
    /// Adding more money to the totals would overflow.
    #[error("the account totals would overflow")]
    Overflow,
}

/// An account holder's record: who they are, how to authenticate them, how
/// to display their money, and every movement on their account.
///
/// Movements are append-only. The only other "mutation" an account ever
/// goes through is being removed from its store when it is closed.
#[derive(Debug, Clone)]
pub struct Account {
    pub(crate) id: AccountId,
    pub owner: String,
    pub username: String,
    pub currency: Currency,
    pub locale: Locale,

    /// Interest percentage paid on each deposit, e.g. 1.2 for 1.2%.
    interest_rate: Amount,
    pin: Pin,
    movements: Vec<Movement>,

    // Both kept in sync with `movements` by `push_movement`.
    totals: Balance,
    pub(super) interest: Amount,
}

impl Account {
    /// Create an account with no movements. Its username is derived from the
    /// owner's name; its id is assigned when it joins a store.
    pub fn new(
        owner: impl Into<String>,
        pin: Pin,
        interest_rate: Amount,
        currency: Currency,
        locale: Locale,
    ) -> Self {
        let owner = owner.into();
        Self {
            id: AccountId::default(),
            username: derive_username(&owner),
            owner,
            interest_rate,
            currency,
            locale,
            pin,
            movements: Vec::new(),
            totals: Balance::default(),
            interest: Amount::ZERO,
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    /// The first word of the owner's name, used to greet them.
    pub fn first_name(&self) -> &str {
        self.owner.split_whitespace().next().unwrap_or_default()
    }

    /// Append a movement. Nothing is appended if the account totals, or the
    /// interest earned, would overflow.
    pub fn push_movement(
        &mut self,
        amount: Amount,
        date: DateTime<Utc>,
    ) -> Result<(), AccountError> {
        let (totals, interest) = self.totals_after(amount)?;

        self.totals = totals;
        self.interest = interest;
        self.movements.push(Movement::new(amount, date));

        Ok(())
    }

    /// Whether `push_movement` would accept `amount`, without appending it.
    pub fn check_movement(&self, amount: Amount) -> Result<(), AccountError> {
        self.totals_after(amount).map(|_| ())
    }

    fn totals_after(&self, amount: Amount) -> Result<(Balance, Amount), AccountError> {
        let mut totals = self.totals;
        totals.record(amount)?;

        let interest = self
            .interest
            .checked_add(self.interest_on(amount)?)
            .ok_or(AccountError::Overflow)?;

        Ok((totals, interest))
    }

    /// Every movement, oldest first.
    pub fn movements(&self) -> &[Movement] {
        &self.movements
    }

    /// The sum of all movements.
    pub fn balance(&self) -> Amount {
        self.totals.amount()
    }

    pub fn totals(&self) -> &Balance {
        &self.totals
    }

    pub fn interest_rate(&self) -> Amount {
        self.interest_rate
    }

    /// Exact match on both the username and the pin.
    pub fn has_credentials(&self, username: &Username, pin: Pin) -> bool {
        self.username == username && self.pin == pin
    }

    pub fn pin_matches(&self, pin: Pin) -> bool {
        self.pin == pin
    }
}

#[cfg(test)]
mod tests {
    use super::{Account, AccountError};
    use crate::format::{Currency, Locale};

    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    fn account() -> Account {
        Account::new("John Smith", 1111, dec!(1.2), Currency::Eur, Locale::PtPt)
    }

    #[test]
    fn test_new_account() {
        let acc = account();
        assert_eq!("js", acc.username);
        assert_eq!("John", acc.first_name());
        assert_eq!(dec!(0), acc.balance());
        assert!(acc.movements().is_empty());
    }

    #[test]
    fn test_push_movement() {
        let mut acc = account();
        let date = Utc.with_ymd_and_hms(2021, 11, 18, 21, 31, 17).unwrap();

        for amount in vec![dec!(200), dec!(455.23), dec!(-306.5), dec!(25000)] {
            acc.push_movement(amount, date).expect("should append");
        }

        assert_eq!(4, acc.movements().len());
        assert_eq!(dec!(25348.73), acc.balance());
        assert_eq!(dec!(25655.23), acc.totals().credit());
        assert_eq!(dec!(306.5), acc.totals().debit());
    }

    #[test]
    // The balance is always the sum of the movements, whatever gets appended.
    fn test_balance_is_sum_of_movements() {
        let mut acc = account();
        let date = Utc.with_ymd_and_hms(2021, 11, 18, 21, 31, 17).unwrap();

        for amount in vec![
            dec!(5000),
            dec!(3400),
            dec!(-150),
            dec!(-790),
            dec!(-3210),
            dec!(-1000),
            dec!(8500),
            dec!(-30),
        ] {
            acc.push_movement(amount, date).expect("should append");
            let sum: Decimal = acc.movements().iter().map(|m| m.amount).sum();
            assert_eq!(sum, acc.balance());
        }
    }

    #[test]
    fn test_push_movement_overflow() {
        let mut acc = account();
        let date = Utc.with_ymd_and_hms(2021, 11, 18, 21, 31, 17).unwrap();
        let very_big_number = Decimal::from_str("70000000000000000000000000000").unwrap();

        acc.push_movement(very_big_number, date)
            .expect("first deposit fits");
        assert_eq!(
            Err(AccountError::Overflow),
            acc.push_movement(very_big_number, date)
        );

        // The failed movement isn't recorded.
        assert_eq!(1, acc.movements().len());
        assert_eq!(very_big_number, acc.balance());
    }

    #[test]
    // The totals would fit, but the interest on the deposit wouldn't: the
    // deposit is turned down rather than breaking the summary later on.
    fn test_push_movement_interest_overflow() {
        let mut acc = account();
        let date = Utc.with_ymd_and_hms(2021, 11, 18, 21, 31, 17).unwrap();
        let very_big_number = Decimal::from_str("70000000000000000000000000000").unwrap();

        assert_eq!(Err(AccountError::Overflow), acc.check_movement(very_big_number));
        assert_eq!(
            Err(AccountError::Overflow),
            acc.push_movement(very_big_number, date)
        );
        assert!(acc.movements().is_empty());
        assert_eq!(dec!(0), acc.balance());

        // Withdrawals earn no interest, so they're still fine.
        acc.push_movement(-very_big_number, date)
            .expect("withdrawal fits");
        assert_eq!(dec!(0), acc.summary().interest);
    }

    #[test]
    fn test_credentials() {
        let acc = account();
        for (username, pin, want) in vec![
            ("js", 1111, true),
            ("js", 1112, false),
            ("jd", 1111, false),
            ("JS", 1111, false),
            ("", 1111, false),
        ] {
            assert_eq!(want, acc.has_credentials(username, pin), "{} {}", username, pin);
        }
    }
}
