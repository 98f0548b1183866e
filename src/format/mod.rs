//! Display formatting for money and dates.
//!
//! Everything here is a pure function of its inputs: "now" is always passed
//! in, never read from the clock.

pub mod currency;
pub mod date;
pub mod locale;

pub use currency::{format_currency, Currency, UnknownCurrency};
pub use date::{format_calendar_date, format_countdown, format_date_time, format_relative_date};
pub use locale::{Locale, UnknownLocale};
