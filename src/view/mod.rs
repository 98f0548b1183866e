//! What the user sees, rendered from an account without ever changing it.

use crate::bank::{Account, MovementKind};
use crate::format::{format_currency, format_date_time, format_relative_date};

use chrono::{DateTime, Utc};

pub const LOGGED_OUT_WELCOME: &str = "Log in to get started";

/// One line of the movements list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementRow {
    /// 1-based position of the movement in the account history, whatever
    /// order the rows are displayed in.
    pub position: usize,
    pub kind: MovementKind,
    pub date: String,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView {
    pub incomes: String,
    pub outcomes: String,
    pub interest: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountView {
    /// Top to bottom.
    pub movements: Vec<MovementRow>,
    pub balance: String,
    pub summary: SummaryView,
}

/// The whole display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub welcome: String,
    pub date: Option<String>,
    pub timer: Option<String>,
    /// `None` while the app is hidden.
    pub account: Option<AccountView>,
}

/// Rows for every movement of the account: newest first, or by ascending
/// amount when `sort` is set. The account's own movements keep their order.
pub fn render_movements(account: &Account, sort: bool, now: DateTime<Utc>) -> Vec<MovementRow> {
    let mut movements: Vec<_> = account.movements().iter().enumerate().collect();
    if sort {
        // Stable, so equal amounts stay in history order.
        movements.sort_by_key(|(_, mov)| mov.amount);
    } else {
        movements.reverse();
    }

    movements
        .into_iter()
        .map(|(i, mov)| MovementRow {
            position: i + 1,
            kind: mov.kind(),
            date: format_relative_date(mov.date, now, account.locale),
            amount: format_currency(mov.amount, account.locale, account.currency),
        })
        .collect()
}

pub fn render_balance(account: &Account) -> String {
    format_currency(account.balance(), account.locale, account.currency)
}

pub fn render_summary(account: &Account) -> SummaryView {
    let summary = account.summary();
    let format = |value| format_currency(value, account.locale, account.currency);

    SummaryView {
        incomes: format(summary.incomes),
        outcomes: format(summary.outcomes),
        interest: format(summary.interest),
    }
}

pub fn render_account(account: &Account, sort: bool, now: DateTime<Utc>) -> AccountView {
    AccountView {
        movements: render_movements(account, sort, now),
        balance: render_balance(account),
        summary: render_summary(account),
    }
}

impl Screen {
    /// Everything hidden, inviting the user to log in.
    pub fn logged_out() -> Self {
        Self {
            welcome: LOGGED_OUT_WELCOME.to_string(),
            date: None,
            timer: None,
            account: None,
        }
    }

    /// The app as seen by the owner of `account`, logged in since `since`.
    pub fn logged_in(
        account: &Account,
        since: DateTime<Utc>,
        timer: String,
        sort: bool,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            welcome: format!("Welcome back, {}!", account.first_name()),
            date: Some(format_date_time(since, account.locale)),
            timer: Some(timer),
            account: Some(render_account(account, sort, now)),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.account.is_some()
    }
}
