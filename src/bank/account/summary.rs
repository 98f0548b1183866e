use crate::bank::Amount;

use super::account::{Account, AccountError};
use rust_decimal_macros::dec;

/// Interest contributions below this amount are not paid out.
const MINIMUM_INTEREST: Amount = dec!(1);

/// Aggregates shown below the movements list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Total of all deposits.
    pub incomes: Amount,

    /// Absolute total of all withdrawals.
    pub outcomes: Amount,

    /// Interest earned on the deposits.
    pub interest: Amount,
}

impl Account {
    pub fn summary(&self) -> Summary {
        Summary {
            incomes: self.totals().credit(),
            outcomes: self.totals().debit(),
            interest: self.interest(),
        }
    }

    /// Interest is paid on each deposit separately, as
    /// `deposit * interest_rate / 100`. A deposit that earns less than 1 earns
    /// nothing at all, even though it still counts toward the incomes.
    pub fn interest(&self) -> Amount {
        self.interest
    }

    /// What a single movement adds to the interest.
    pub(super) fn interest_on(&self, amount: Amount) -> Result<Amount, AccountError> {
        if amount <= dec!(0) {
            return Ok(dec!(0));
        }

        let interest = amount
            .checked_mul(self.interest_rate())
            .and_then(|value| value.checked_div(dec!(100)))
            .ok_or(AccountError::Overflow)?;

        if interest >= MINIMUM_INTEREST {
            Ok(interest)
        } else {
            Ok(dec!(0))
        }
    }
}

#[cfg(test)]
mod summary_tests {
    use super::{Account, Summary};
    use crate::format::{Currency, Locale};

    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn account_with(rate: rust_decimal::Decimal, movements: Vec<rust_decimal::Decimal>) -> Account {
        let date = Utc.with_ymd_and_hms(2021, 11, 18, 21, 31, 17).unwrap();
        let mut acc = Account::new("John Smith", 1111, rate, Currency::Eur, Locale::PtPt);
        for amount in movements {
            acc.push_movement(amount, date).expect("should append");
        }
        acc
    }

    #[test]
    fn test_interest() {
        for (rate, movements, want) in vec![
            // 2.4 and 5.46276: both paid.
            (dec!(1.2), vec![dec!(200), dec!(455.23)], dec!(7.86276)),
            // 0.6: not paid.
            (dec!(1.2), vec![dec!(50)], dec!(0)),
            // Exactly 1 is paid.
            (dec!(1.0), vec![dec!(100)], dec!(1)),
            // Withdrawals earn nothing and cost nothing.
            (dec!(1.5), vec![dec!(-5000), dec!(1000)], dec!(15)),
            (dec!(1.5), vec![], dec!(0)),
        ] {
            let acc = account_with(rate, movements.clone());
            assert_eq!(want, acc.interest(), "{:?} at {}", movements, rate);
        }
    }

    #[test]
    // A deposit too small to earn interest still counts toward the incomes.
    fn test_small_deposit_counts_as_income() {
        let acc = account_with(dec!(1.2), vec![dec!(50), dec!(-20)]);
        assert_eq!(
            Summary {
                incomes: dec!(50),
                outcomes: dec!(20),
                interest: dec!(0),
            },
            acc.summary()
        );
    }

    #[test]
    fn test_summary_demo_account() {
        let acc = account_with(
            dec!(1.2),
            vec![
                dec!(200),
                dec!(455.23),
                dec!(-306.5),
                dec!(25000),
                dec!(-642.21),
                dec!(-133.9),
                dec!(79.97),
                dec!(1300),
            ],
        );

        let summary = acc.summary();
        assert_eq!(dec!(27035.20), summary.incomes);
        assert_eq!(dec!(1082.61), summary.outcomes);
        // 79.97 * 1.2% = 0.95964 is left out.
        assert_eq!(dec!(323.46276), summary.interest);
    }
}
