//! The account store: every account known to the bank, with its movements.
//!
//! Account: owner, credentials, currency/locale and an append-only list of
//! dated movements.
//! AccountStore: the ordered list of accounts, looked up by username.

pub mod account;
pub mod seed;
pub mod store;
pub mod transfer;

pub use account::account::{Account, AccountError};
pub use account::movement::{Movement, MovementKind};
pub use account::summary::Summary;
pub use store::AccountStore;

// Using named types doesn't provide any compiler help, but it helps a lot with
// readability.
// Consider the following, when looking up an account:
// (1) fn find(&self, username: &str) -> Option<&Account>
// (2) fn find(&self, username: &Username) -> Option<&Account>
// Both compile, but (2) tells you what kind of string is expected.
// Besides, maintenance is easier: changing pins e.g. from u32 to u64 is trivial.
pub type Pin = u32;
pub type Username = str;

// I decided to use a decimal library instead of the built-in f64 type, to be
// safer when dealing with money, and making the decimal precision easier to
// deal with.
pub type Amount = rust_decimal::Decimal;

/// Identifies an account for as long as it lives in a store.
/// Ids are handed out by the store and never reused, so a closed account's
/// id can't accidentally point to another account later on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct AccountId(pub u32);

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
