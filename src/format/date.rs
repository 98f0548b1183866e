use super::locale::{DateOrder, Locale};

use chrono::{DateTime, Datelike, Timelike, Utc};

/// Describe how long ago `date` was, seen from `now`: "Today", "Yesterday",
/// "3 days ago" up to a week, and the calendar date past that.
///
/// The day count is the absolute difference in whole days, truncated, so a
/// date 47 hours away is "Yesterday" and dates in the future read the same as
/// dates in the past.
pub fn format_relative_date(date: DateTime<Utc>, now: DateTime<Utc>, locale: Locale) -> String {
    let days_passed = (now - date).num_days().abs();
    match days_passed {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        2..=7 => format!("{} days ago", days_passed),
        _ => format_calendar_date(date, locale),
    }
}

/// Numeric calendar date, e.g. `11/18/2021` in en-US, `18/11/2021` in pt-PT
/// and `18.11.2021` in de-DE.
pub fn format_calendar_date(date: DateTime<Utc>, locale: Locale) -> String {
    let conventions = locale.conventions();

    let pad = |n: u32| {
        if conventions.pad_day_month {
            format!("{:02}", n)
        } else {
            n.to_string()
        }
    };
    let (first, second) = match conventions.date_order {
        DateOrder::MonthDayYear => (pad(date.month()), pad(date.day())),
        DateOrder::DayMonthYear => (pad(date.day()), pad(date.month())),
    };

    let sep = conventions.date_separator;
    format!("{}{}{}{}{}", first, sep, second, sep, date.year())
}

/// Calendar date followed by the time of day, e.g. `10/18/2026, 2:05 PM` or
/// `18/10/2026, 14:05`.
pub fn format_date_time(date: DateTime<Utc>, locale: Locale) -> String {
    let time = if locale.conventions().twelve_hour_clock {
        let (pm, hour) = date.hour12();
        format!(
            "{}:{:02} {}",
            hour,
            date.minute(),
            if pm { "PM" } else { "AM" }
        )
    } else {
        format!("{:02}:{:02}", date.hour(), date.minute())
    };

    format!("{}, {}", format_calendar_date(date, locale), time)
}

/// Minutes and seconds, both zero padded: 600 gives `10:00`.
pub fn format_countdown(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
