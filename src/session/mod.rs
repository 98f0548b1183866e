//! The session controller: who is logged in, for how long, and what they
//! can do to their account.
//!
//! Session: the whole mutable state of the app (accounts, current account,
//! pending timers). Every user action and every timer goes through it, one at
//! a time, and the screen is rendered from it afterwards.

pub mod auth;
pub mod close;
pub mod error;
pub mod loan;
pub mod login;
pub mod scheduler;
pub mod timer;
pub mod transfer;

pub use auth::Credentials;
pub use error::ActionError;

use crate::bank::{Account, AccountId, AccountStore, Amount};
use crate::view::Screen;

use chrono::{DateTime, Duration, Utc};
use scheduler::Scheduler;
use timer::{Countdown, LogoutTimer};
use tracing::{info, warn};

/// Default time before an idle session is logged out.
pub const LOGOUT_AFTER_SECONDS: u32 = 600;

/// Default delay between a loan being approved and the money landing.
pub const LOAN_DELAY_MILLISECONDS: i64 = 2500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Length of the logout countdown, in ticks.
    pub logout_after: u32,
    /// Time between two countdown ticks.
    pub tick: Duration,
    pub loan_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            logout_after: LOGOUT_AFTER_SECONDS,
            tick: Duration::seconds(1),
            loan_delay: Duration::milliseconds(LOAN_DELAY_MILLISECONDS),
        }
    }
}

/// Work scheduled for later.
#[derive(Debug, Clone, PartialEq)]
pub enum Task {
    /// The logout countdown goes down by one.
    LogoutTick,

    /// An approved loan is paid into the account that asked for it.
    AwardLoan { account: AccountId, amount: Amount },
}

/// Something that happened when scheduled tasks ran.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Tick { remaining: u32 },
    Expired { account: AccountId },
    LoanAwarded { account: AccountId, amount: Amount },
    LoanDropped { account: AccountId, amount: Amount },
}

impl Event {
    /// Whether the event changes more than the countdown label.
    pub fn changes_screen(&self) -> bool {
        !matches!(self, Event::Tick { .. })
    }
}

#[derive(Debug)]
pub enum State {
    LoggedOut,
    LoggedIn(LoggedIn),
}

#[derive(Debug)]
pub struct LoggedIn {
    pub account: AccountId,
    pub since: DateTime<Utc>,
    pub timer: LogoutTimer,
}

pub struct Session {
    store: AccountStore,
    config: SessionConfig,
    state: State,
    sorted: bool,
    scheduler: Scheduler<Task>,
}

impl Session {
    pub fn new(store: AccountStore, config: SessionConfig) -> Self {
        Self {
            store,
            config,
            state: State::LoggedOut,
            sorted: false,
            scheduler: Scheduler::new(),
        }
    }

    pub fn store(&self) -> &AccountStore {
        &self.store
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    /// The logged in account.
    pub fn current_account(&self) -> Option<&Account> {
        match &self.state {
            State::LoggedIn(logged_in) => self.store.get(logged_in.account),
            State::LoggedOut => None,
        }
    }

    pub(crate) fn current_id(&self) -> Result<AccountId, ActionError> {
        match &self.state {
            State::LoggedIn(logged_in) => Ok(logged_in.account),
            State::LoggedOut => Err(ActionError::NotLoggedIn),
        }
    }

    /// Flip between newest-first and ascending-amount order.
    /// Returns whether movements are now sorted.
    pub fn toggle_sort(&mut self) -> Result<bool, ActionError> {
        self.current_id()?;
        self.sorted = !self.sorted;

        Ok(self.sorted)
    }

    /// When the next scheduled task is due.
    pub fn next_deadline(&self) -> Option<DateTime<Utc>> {
        self.scheduler.next_due()
    }

    /// Run every task due by `now`, in order.
    pub fn advance(&mut self, now: DateTime<Utc>) -> Vec<Event> {
        let mut events = vec![];
        while let Some((handle, due, task)) = self.scheduler.pop_due(now) {
            let event = match task {
                Task::LogoutTick => self.tick(handle, due),
                Task::AwardLoan { account, amount } => Some(self.award_loan(account, amount, due)),
            };
            events.extend(event);
        }

        events
    }

    fn tick(&mut self, handle: scheduler::TaskHandle, due: DateTime<Utc>) -> Option<Event> {
        let logged_in = match &mut self.state {
            State::LoggedIn(logged_in) if logged_in.timer.owns(handle) => logged_in,
            _ => return None,
        };

        match logged_in.timer.tick(due, &mut self.scheduler) {
            Countdown::Running(remaining) => Some(Event::Tick { remaining }),
            Countdown::Expired => {
                let account = logged_in.account;
                info!(%account, "session expired");
                self.state = State::LoggedOut;

                Some(Event::Expired { account })
            }
        }
    }

    /// Start the logout countdown over, if someone is logged in.
    pub(crate) fn restart_timer(&mut self, now: DateTime<Utc>) {
        if let State::LoggedIn(logged_in) = &mut self.state {
            logged_in.timer.cancel(&mut self.scheduler);
            logged_in.timer = LogoutTimer::start(
                self.config.logout_after,
                self.config.tick,
                now,
                &mut self.scheduler,
            );
        }
    }

    /// Leave the logged in state, stopping the countdown.
    pub(crate) fn end_session(&mut self) {
        if let State::LoggedIn(logged_in) = &self.state {
            logged_in.timer.cancel(&mut self.scheduler);
        }
        self.state = State::LoggedOut;
    }

    /// Render everything the user sees.
    pub fn screen(&self, now: DateTime<Utc>) -> Screen {
        let logged_in = match &self.state {
            State::LoggedIn(logged_in) => logged_in,
            State::LoggedOut => return Screen::logged_out(),
        };

        match self.store.get(logged_in.account) {
            Some(account) => Screen::logged_in(
                account,
                logged_in.since,
                logged_in.timer.label(),
                self.sorted,
                now,
            ),
            None => {
                warn!(account = %logged_in.account, "logged in account is missing");
                Screen::logged_out()
            }
        }
    }
}
