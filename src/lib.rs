//! A small demo bank.
//!
//! Accounts live in memory: each has an owner, a pin, a currency and a
//! locale, and a list of dated movements. A session lets one account holder
//! at a time log in, look at their movements, balance and interest, send
//! money, ask for loans and close their account, and logs them out after ten
//! minutes without activity.

pub mod bank;
pub mod config;
pub mod format;
pub mod input;
pub mod output;
pub mod run;
pub mod session;
pub mod view;
