use crate::bank::Amount;
use crate::session::Credentials;

use rust_decimal_macros::dec;
use std::io::BufRead;
use std::str::FromStr;
use std::sync::mpsc::{self, Receiver};
use thiserror::Error;

/// What the user asked for, one command per line.
#[derive(Debug, PartialEq)]
pub enum Command {
    Login(Credentials),
    Transfer { to: String, amount: Amount },
    Loan { amount: Amount },
    Close(Credentials),
    Sort,
    Statement,
    Help,
    Quit,
}

#[derive(Debug, PartialEq, Error)]
pub enum Error {
    #[error("unknown command {0:?}, type `help` to list the commands")]
    UnknownCommand(String),

    /// The command exists, but its arguments are off.
    #[error("usage: {0}")]
    Usage(&'static str),
}

pub const USAGE: &[&str] = &[
    "login <user> <pin>",
    "transfer <to> <amount>",
    "loan <amount>",
    "close <user> <pin>",
    "sort",
    "statement",
    "help",
    "quit",
];

// Read commands in a new thread, so the session can keep its timers going
// while waiting for the user.
//
// When reading fails, I'm making the assumption that there is nothing more
// to read: the stream just ends, the same way it would on EOF.
pub fn parse(input_stream: impl std::io::Read + Send + 'static) -> Receiver<Result<Command, Error>> {
    let (command_tx, command_rx) = mpsc::channel();

    let buffered = std::io::BufReader::new(input_stream);
    std::thread::spawn(move || {
        for line in buffered.lines() {
            let line = match line {
                Ok(line) => line,
                Err(_) => break,
            };

            if let Some(command) = parse_line(&line) {
                // Fails once the receiving end has stopped listening, e.g.
                // after `quit`. Nothing left to do then.
                if command_tx.send(command).is_err() {
                    break;
                }
            }
        }
    });

    command_rx
}

/// Parse a single line. Blank lines are no command at all.
pub fn parse_line(line: &str) -> Option<Result<Command, Error>> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let (name, args) = words.split_first()?;

    let command = match (name.to_lowercase().as_str(), args) {
        ("login", [user, pin]) => Ok(Command::Login(Credentials::new(*user, pin))),
        ("login", _) => Err(Error::Usage(USAGE[0])),
        ("transfer", [to, amount]) => Ok(Command::Transfer {
            to: to.to_string(),
            amount: parse_amount(amount),
        }),
        ("transfer", _) => Err(Error::Usage(USAGE[1])),
        ("loan", [amount]) => Ok(Command::Loan {
            amount: parse_amount(amount),
        }),
        ("loan", _) => Err(Error::Usage(USAGE[2])),
        ("close", [user, pin]) => Ok(Command::Close(Credentials::new(*user, pin))),
        ("close", _) => Err(Error::Usage(USAGE[3])),
        ("sort", []) => Ok(Command::Sort),
        ("sort", _) => Err(Error::Usage(USAGE[4])),
        ("statement", []) => Ok(Command::Statement),
        ("statement", _) => Err(Error::Usage(USAGE[5])),
        ("help", _) => Ok(Command::Help),
        ("quit" | "exit", _) => Ok(Command::Quit),
        _ => Err(Error::UnknownCommand(name.to_string())),
    };

    Some(command)
}

/// Amounts that aren't numbers count as zero, which no action accepts.
pub fn parse_amount(raw: &str) -> Amount {
    Amount::from_str(raw.trim()).unwrap_or(dec!(0))
}
