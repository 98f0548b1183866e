use crate::bank::{Account, Amount};
use crate::input::USAGE;
use crate::view::Screen;

use chrono::SecondsFormat;
use serde::Serialize;
use std::io::{self, Write};

// Writes the screen as plain text. Logged out, only the welcome text shows.
pub fn write_screen(output: &mut impl Write, screen: &Screen) -> io::Result<()> {
    writeln!(output, "{}", screen.welcome)?;

    if let Some(date) = &screen.date {
        writeln!(output, "As of {}", date)?;
    }

    if let Some(account) = &screen.account {
        writeln!(output, "Current balance: {}", account.balance)?;
        for row in &account.movements {
            writeln!(
                output,
                "{:>4} {:<10} {:<12} {:>18}",
                row.position,
                row.kind.label(),
                row.date,
                row.amount
            )?;
        }
        writeln!(
            output,
            "In: {}  Out: {}  Interest: {}",
            account.summary.incomes, account.summary.outcomes, account.summary.interest
        )?;
    }

    if let Some(timer) = &screen.timer {
        writeln!(output, "You will be logged out in {}", timer)?;
    }

    writeln!(output)
}

/// Alerts stand out from the rest of the screen.
pub fn write_alert(output: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(output, "! {}", message)
}

pub fn write_help(output: &mut impl Write) -> io::Result<()> {
    writeln!(output, "Commands:")?;
    for usage in USAGE {
        writeln!(output, "  {}", usage)?;
    }

    Ok(())
}

#[derive(Serialize)]
struct MovementRecord {
    date: String,

    #[serde(rename = "type")]
    kind: &'static str,

    amount: Amount,
}

// Writes every movement of the account as CSV, oldest first.
pub fn write_statement(output_stream: impl Write, account: &Account) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(output_stream);

    for mov in account.movements() {
        writer.serialize(MovementRecord {
            date: mov.date.to_rfc3339_opts(SecondsFormat::Millis, true),
            kind: mov.kind().label(),
            amount: mov.amount,
        })?;
    }
    writer.flush()?;

    Ok(())
}
