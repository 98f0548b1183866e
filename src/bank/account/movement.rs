use crate::bank::Amount;

use chrono::{DateTime, Utc};
use rust_decimal_macros::dec;

/// A single signed transaction on an account, with the moment it happened.
///
/// Keeping the amount and its date in the same struct means the two can
/// never get out of step, whatever gets appended to the account.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Movement {
    pub amount: Amount,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementKind {
    Deposit,    // Money coming in.
    Withdrawal, // Money going out. Zero amounts are shown as withdrawals too.
}

impl Movement {
    pub fn new(amount: Amount, date: DateTime<Utc>) -> Self {
        Self { amount, date }
    }

    pub fn kind(&self) -> MovementKind {
        if self.amount > dec!(0) {
            MovementKind::Deposit
        } else {
            MovementKind::Withdrawal
        }
    }
}

impl MovementKind {
    pub fn label(&self) -> &'static str {
        match self {
            MovementKind::Deposit => "deposit",
            MovementKind::Withdrawal => "withdrawal",
        }
    }
}

impl std::fmt::Display for MovementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[test]
fn test_movement_kind() {
    use chrono::TimeZone;

    let date = Utc.with_ymd_and_hms(2021, 11, 18, 21, 31, 17).unwrap();
    for (amount, want) in vec![
        (dec!(200), MovementKind::Deposit),
        (dec!(0.01), MovementKind::Deposit),
        (dec!(0), MovementKind::Withdrawal),
        (dec!(-306.5), MovementKind::Withdrawal),
    ] {
        assert_eq!(want, Movement::new(amount, date).kind());
    }
}
