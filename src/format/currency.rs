use super::locale::{Locale, SymbolPosition, NBSP};
use crate::bank::Amount;

use rust_decimal::RoundingStrategy;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
#[error("unsupported currency {0:?}")]
pub struct UnknownCurrency(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    Eur,
    Gbp,
    Usd,
}

impl Currency {
    /// ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Usd => "USD",
        }
    }

    /// Number of digits after the decimal separator.
    pub fn minor_digits(&self) -> u32 {
        2
    }

    /// The symbol depends on who's reading: a dollar is just "$" in the US
    /// and in Germany, but "US$" in Portugal.
    pub fn symbol(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Currency::Eur, _) => "€",
            (Currency::Gbp, _) => "£",
            (Currency::Usd, Locale::PtPt) => "US$",
            (Currency::Usd, _) => "$",
        }
    }
}

impl FromStr for Currency {
    type Err = UnknownCurrency;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code.to_ascii_uppercase().as_str() {
            "EUR" => Ok(Currency::Eur),
            "GBP" => Ok(Currency::Gbp),
            "USD" => Ok(Currency::Usd),
            _ => Err(UnknownCurrency(code.to_string())),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Format an amount of money the way people in `locale` expect to read it,
/// e.g. `$1,300.00`, `25 000,00 €` or `-306,50 €`.
///
/// The amount is rounded to the currency's minor digits, half away from zero.
pub fn format_currency(value: Amount, locale: Locale, currency: Currency) -> String {
    let conventions = locale.conventions();
    let rounded = value.round_dp_with_strategy(
        currency.minor_digits(),
        RoundingStrategy::MidpointAwayFromZero,
    );

    let number = format_number(rounded.abs(), locale, currency.minor_digits());
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let symbol = currency.symbol(locale);

    match conventions.symbol_position {
        SymbolPosition::Before => format!("{}{}{}", sign, symbol, number),
        SymbolPosition::After => format!("{}{}{}{}", sign, number, NBSP, symbol),
    }
}

// Lay out a non-negative number with exactly `minor_digits` decimals, using
// the locale's separators.
fn format_number(value: Amount, locale: Locale, minor_digits: u32) -> String {
    let conventions = locale.conventions();

    // Decimal's Display honours the precision flag, padding with zeros.
    let plain = format!("{:.*}", minor_digits as usize, value);
    let (integer, fraction) = match plain.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (plain.as_str(), None),
    };

    let mut out = group_digits(
        integer,
        conventions.group_separator,
        conventions.min_grouping_digits,
    );
    if let Some(fraction) = fraction {
        out.push(conventions.decimal_separator);
        out.push_str(fraction);
    }

    out
}

fn group_digits(integer: &str, separator: char, min_grouping_digits: usize) -> String {
    let len = integer.len();
    if len < 3 + min_grouping_digits {
        return integer.to_string();
    }

    let mut out = String::with_capacity(len + len / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(digit);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::{format_currency, Currency, UnknownCurrency};
    use crate::format::Locale;

    use rust_decimal_macros::dec;

    #[test]
    fn test_format_currency() {
        for (value, locale, currency, want) in vec![
            (dec!(1300), Locale::EnUs, Currency::Usd, "$1,300.00"),
            (dec!(-306.5), Locale::EnUs, Currency::Usd, "-$306.50"),
            (dec!(25000), Locale::EnUs, Currency::Usd, "$25,000.00"),
            (dec!(1234567.891), Locale::EnUs, Currency::Usd, "$1,234,567.89"),
            (dec!(0), Locale::EnUs, Currency::Usd, "$0.00"),
            (dec!(999), Locale::EnUs, Currency::Usd, "$999.00"),
            (dec!(1300), Locale::EnGb, Currency::Gbp, "£1,300.00"),
            (dec!(1300), Locale::PtPt, Currency::Eur, "1300,00\u{a0}€"),
            (dec!(25000), Locale::PtPt, Currency::Eur, "25\u{a0}000,00\u{a0}€"),
            (dec!(-642.21), Locale::PtPt, Currency::Eur, "-642,21\u{a0}€"),
            (dec!(5000), Locale::PtPt, Currency::Usd, "5000,00\u{a0}US$"),
            (dec!(1300), Locale::DeDe, Currency::Eur, "1.300,00\u{a0}€"),
            (dec!(1300), Locale::DeDe, Currency::Usd, "1.300,00\u{a0}$"),
        ] {
            assert_eq!(want, format_currency(value, locale, currency));
        }
    }

    #[test]
    fn test_format_currency_rounding() {
        for (value, want) in vec![
            (dec!(5.46276), "$5.46"),
            (dec!(0.005), "$0.01"),
            (dec!(-0.005), "-$0.01"),
            (dec!(2.675), "$2.68"),
            (dec!(999.995), "$1,000.00"),
            // Rounds to zero, so no sign.
            (dec!(-0.001), "$0.00"),
        ] {
            assert_eq!(want, format_currency(value, Locale::EnUs, Currency::Usd));
        }
    }

    #[test]
    fn test_parse_currency() {
        assert_eq!(Ok(Currency::Eur), "EUR".parse::<Currency>());
        assert_eq!(Ok(Currency::Usd), "usd".parse::<Currency>());
        assert_eq!(
            Err(UnknownCurrency("JPY".to_string())),
            "JPY".parse::<Currency>()
        );
    }
}
