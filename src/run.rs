use crate::input::{self, Command};
use crate::output::{write_alert, write_help, write_screen, write_statement};
use crate::session::{ActionError, Event, Session};

use chrono::{DateTime, Utc};
use std::io::{self, Write};
use std::sync::mpsc::RecvTimeoutError;
use tracing::debug;

/// Drive a session from a stream of commands, until the stream ends or the
/// user quits. The screen is written after every command, and whenever a
/// scheduled task changes it.
///
/// Commands and timers are handled on this thread only, one at a time; the
/// input is read on another thread and passed over a channel. Tasks still
/// pending when the input ends are dropped.
pub fn run(
    input_stream: impl std::io::Read + Send + 'static,
    mut output_stream: impl Write,
    mut session: Session,
) -> io::Result<Session> {
    let commands = input::parse(input_stream);
    write_screen(&mut output_stream, &session.screen(Utc::now()))?;

    loop {
        let received = match session.next_deadline() {
            Some(deadline) => {
                let wait = (deadline - Utc::now()).to_std().unwrap_or_default();
                commands.recv_timeout(wait)
            }
            None => commands.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };

        // Whatever came due while waiting runs first, so a command never
        // lands on a session that should already be over.
        run_due_tasks(&mut session, &mut output_stream)?;

        match received {
            Ok(Ok(Command::Quit)) | Err(RecvTimeoutError::Disconnected) => break,
            Ok(Ok(command)) => handle(&mut session, command, Utc::now(), &mut output_stream)?,
            Ok(Err(err)) => write_alert(&mut output_stream, &err.to_string())?,
            Err(RecvTimeoutError::Timeout) => {}
        }
        output_stream.flush()?;
    }
    output_stream.flush()?;

    Ok(session)
}

fn run_due_tasks(session: &mut Session, output_stream: &mut impl Write) -> io::Result<()> {
    let now = Utc::now();
    let events = session.advance(now);
    if events.iter().any(Event::changes_screen) {
        debug!(?events, "scheduled tasks ran");
        write_screen(output_stream, &session.screen(now))?;
    }

    Ok(())
}

fn handle(
    session: &mut Session,
    command: Command,
    now: DateTime<Utc>,
    output_stream: &mut impl Write,
) -> io::Result<()> {
    let result = match command {
        Command::Login(credentials) => session.login(&credentials, now).map(|_| None),
        Command::Transfer { to, amount } => session.transfer(&to, amount, now).map(|_| None),
        Command::Loan { amount } => session.request_loan(amount, now).map(|_| {
            let seconds = session.loan_delay().num_milliseconds() as f64 / 1000.0;
            Some(format!("Bank gives loan after {}s", seconds))
        }),
        Command::Close(credentials) => session.close_account(&credentials).map(|_| None),
        Command::Sort => session.toggle_sort().map(|_| None),
        Command::Statement => {
            return match session.current_account() {
                Some(account) => write_statement(&mut *output_stream, account).map_err(io::Error::from),
                None => write_alert(output_stream, &ActionError::NotLoggedIn.to_string()),
            }
        }
        Command::Help => return write_help(output_stream),
        Command::Quit => return Ok(()),
    };

    match result {
        Ok(Some(notice)) => write_alert(output_stream, &notice)?,
        Ok(None) => {}
        Err(err) => write_alert(output_stream, &err.to_string())?,
    }

    write_screen(output_stream, &session.screen(now))
}

#[cfg(test)]
mod tests {
    use super::run;
    use crate::bank::seed::demo_accounts;
    use crate::session::{Session, SessionConfig};

    use chrono::Duration;
    use rust_decimal_macros::dec;

    fn run_script(script: &'static str) -> (String, Session) {
        run_script_with(SessionConfig::default(), script)
    }

    fn run_script_with(config: SessionConfig, script: &'static str) -> (String, Session) {
        let session = Session::new(demo_accounts().unwrap(), config);
        let mut output_stream = Vec::new();

        let session = run(std::io::Cursor::new(script), &mut output_stream, session)
            .expect("should run");
        (String::from_utf8(output_stream).unwrap(), session)
    }

    #[test]
    fn test_run_session() {
        let (output, session) = run_script(
            "login js 1111\n\
             transfer jd 500\n\
             sort\n\
             close js 1111\n",
        );

        assert!(output.starts_with("Log in to get started\n"));
        assert!(output.contains("Welcome back, John!"));
        assert!(output.contains("Current balance: 25\u{a0}452,59\u{a0}€"));
        assert!(!output.contains("! "));

        assert!(session.current_account().is_none());
        assert!(session.store().find("js").is_none());
        assert_eq!(dec!(12220), session.store().find("jd").unwrap().balance());
    }

    #[test]
    fn test_run_alerts() {
        let (output, _) = run_script(
            "sort\n\
             login js 9999\n\
             login jd 2222\n\
             transfer jd 10\n\
             loan 1000000\n\
             loan 1000\n\
             close js 1111\n\
             dance\n",
        );

        for alert in vec![
            "! Log in to get started\n",
            "! Username or password is not correct\n",
            "! Receiver can not receive that amount\n",
            "! You can not get that amount of loan\n",
            "! Bank gives loan after 2.5s\n",
            "! Username or pin is not correct\n",
            "! unknown command \"dance\", type `help` to list the commands\n",
        ] {
            assert!(output.contains(alert), "missing {:?} in {}", alert, output);
        }
    }

    #[test]
    fn test_run_quit_and_statement() {
        let (output, session) = run_script(
            "login jd 2222\n\
             statement\n\
             quit\n\
             transfer js 100\n",
        );

        assert!(output.contains("date,type,amount\n2021-11-01T13:15:33.035Z,deposit,5000\n"));
        // Nothing after quit is handled.
        assert_eq!(8, session.store().find("jd").unwrap().movements().len());
    }

    #[test]
    fn test_run_help() {
        let (output, _) = run_script("help\n");
        assert!(output.contains("  transfer <to> <amount>\n"));
    }

    #[test]
    // The loan is paid while the loop waits, and the screen is redrawn with it.
    fn test_run_redraws_on_loan_award() {
        let config = SessionConfig {
            loan_delay: Duration::zero(),
            ..SessionConfig::default()
        };
        let (output, session) = run_script_with(config, "login jd 2222\nloan 1000\n");

        assert!(output.contains("! Bank gives loan after 0s\n"));
        let last_screen = output.rsplit("Welcome back, Jessica!").next().unwrap();
        assert!(last_screen.contains("Current balance: $12,720.00"), "{}", output);
        assert!(last_screen.contains("   9 deposit    Today"), "{}", output);
        assert_eq!(9, session.store().find("jd").unwrap().movements().len());
    }

    #[test]
    // At the end of the countdown the app is hidden again.
    fn test_run_redraws_on_expiry() {
        let config = SessionConfig {
            logout_after: 0,
            ..SessionConfig::default()
        };
        let (output, session) = run_script_with(config, "login js 1111\n");

        assert!(output.contains("Welcome back, John!"));
        assert!(output.ends_with("You will be logged out in 00:00\n\nLog in to get started\n\n"), "{}", output);
        assert!(session.current_account().is_none());
    }

    #[test]
    // Overdue tasks run before the next command: the countdown is already
    // over when `sort` comes in.
    fn test_run_due_tasks_before_command() {
        let config = SessionConfig {
            logout_after: 0,
            ..SessionConfig::default()
        };
        let (output, session) = run_script_with(config, "login js 1111\nsort\n");

        assert!(output.contains("! Log in to get started\n"), "{}", output);
        assert!(!session.is_sorted());
    }
}
