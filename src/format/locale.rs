use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Non-breaking space, used where a number must not be split across lines.
pub(crate) const NBSP: char = '\u{a0}';

#[derive(Debug, PartialEq, Error)]
#[error("unsupported locale {0:?}")]
pub struct UnknownLocale(pub String);

/// The locales the bank knows how to display money and dates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    EnUs,
    EnGb,
    PtPt,
    DeDe,
}

/// Where the currency symbol goes, relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    Before, // $1,300.00
    After,  // 1300,00 €
}

/// Order of the fields in a numeric calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrder {
    MonthDayYear,
    DayMonthYear,
}

/// Everything needed to lay out numbers and dates for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conventions {
    pub decimal_separator: char,
    pub group_separator: char,
    /// Integer parts with fewer than `3 + min_grouping_digits` digits aren't
    /// grouped at all: pt-PT writes 1300 but 25 000.
    pub min_grouping_digits: usize,
    pub symbol_position: SymbolPosition,

    pub date_order: DateOrder,
    pub date_separator: char,
    pub pad_day_month: bool,
    pub twelve_hour_clock: bool,
}

impl Locale {
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::EnGb => "en-GB",
            Locale::PtPt => "pt-PT",
            Locale::DeDe => "de-DE",
        }
    }

    pub fn conventions(&self) -> Conventions {
        match self {
            Locale::EnUs => Conventions {
                decimal_separator: '.',
                group_separator: ',',
                min_grouping_digits: 1,
                symbol_position: SymbolPosition::Before,
                date_order: DateOrder::MonthDayYear,
                date_separator: '/',
                pad_day_month: false,
                twelve_hour_clock: true,
            },
            Locale::EnGb => Conventions {
                decimal_separator: '.',
                group_separator: ',',
                min_grouping_digits: 1,
                symbol_position: SymbolPosition::Before,
                date_order: DateOrder::DayMonthYear,
                date_separator: '/',
                pad_day_month: true,
                twelve_hour_clock: false,
            },
            Locale::PtPt => Conventions {
                decimal_separator: ',',
                group_separator: NBSP,
                min_grouping_digits: 2,
                symbol_position: SymbolPosition::After,
                date_order: DateOrder::DayMonthYear,
                date_separator: '/',
                pad_day_month: true,
                twelve_hour_clock: false,
            },
            Locale::DeDe => Conventions {
                decimal_separator: ',',
                group_separator: '.',
                min_grouping_digits: 1,
                symbol_position: SymbolPosition::After,
                date_order: DateOrder::DayMonthYear,
                date_separator: '.',
                pad_day_month: false,
                twelve_hour_clock: false,
            },
        }
    }
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    // Tags are matched case-insensitively, and "_" is accepted for "-".
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.replace('_', "-").to_ascii_lowercase().as_str() {
            "en-us" => Ok(Locale::EnUs),
            "en-gb" => Ok(Locale::EnGb),
            "pt-pt" => Ok(Locale::PtPt),
            "de-de" => Ok(Locale::DeDe),
            _ => Err(UnknownLocale(tag.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[test]
fn test_parse_locale() {
    for (tag, want) in vec![
        ("en-US", Ok(Locale::EnUs)),
        ("en_gb", Ok(Locale::EnGb)),
        ("pt-PT", Ok(Locale::PtPt)),
        ("DE-de", Ok(Locale::DeDe)),
        ("fr-FR", Err(UnknownLocale("fr-FR".to_string()))),
        ("", Err(UnknownLocale("".to_string()))),
    ] {
        assert_eq!(want, tag.parse::<Locale>());
    }
}
