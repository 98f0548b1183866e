#[allow(clippy::module_inception)]
pub mod account;
pub mod balance;
pub mod loan;
pub mod movement;
pub mod summary;
pub mod username;
