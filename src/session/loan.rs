use super::{ActionError, Event, Session, Task};
use crate::bank::account::loan::LoanRejection;
use crate::bank::{AccountId, Amount};

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info, warn};

/// An approved loan, waiting to be paid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanApproval {
    pub amount: Amount,
    pub due: DateTime<Utc>,
}

impl Session {
    /// Ask the bank for a loan. An approved loan is paid after the loan
    /// delay, into the account that asked for it.
    pub fn request_loan(
        &mut self,
        requested: Amount,
        now: DateTime<Utc>,
    ) -> Result<LoanApproval, ActionError> {
        let account_id = self.current_id()?;
        let account = self.store.get(account_id).ok_or(ActionError::NotLoggedIn)?;

        let amount = match account.loan_eligibility(requested) {
            Ok(amount) => amount,
            Err(reason) => {
                debug!(account = %account_id, %requested, %reason, "loan rejected");
                return Err(reason.into());
            }
        };

        let due = now
            .checked_add_signed(self.config.loan_delay)
            .ok_or(ActionError::LoanRejected(LoanRejection::PaymentOutOfRange))?;
        self.scheduler.schedule(
            due,
            Task::AwardLoan {
                account: account_id,
                amount,
            },
        );

        info!(account = %account_id, %amount, %due, "loan approved");
        Ok(LoanApproval { amount, due })
    }

    pub fn loan_delay(&self) -> Duration {
        self.config.loan_delay
    }

    pub(super) fn award_loan(
        &mut self,
        account: AccountId,
        amount: Amount,
        date: DateTime<Utc>,
    ) -> Event {
        let paid = match self.store.get_mut(account) {
            Some(acc) => acc.push_movement(amount, date).map_err(|err| err.to_string()),
            None => Err("the account is closed".to_string()),
        };

        if let Err(reason) = paid {
            warn!(%account, %amount, %reason, "loan dropped");
            return Event::LoanDropped { account, amount };
        }

        info!(%account, %amount, "loan paid");
        if self.current_id() == Ok(account) {
            self.restart_timer(date);
        }

        Event::LoanAwarded { account, amount }
    }
}
