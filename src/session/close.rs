use super::auth::{confirm, Credentials};
use super::{ActionError, Session, Task};
use crate::bank::Account;

use tracing::{debug, info};

impl Session {
    /// Close the logged in account for good, after asking for its
    /// credentials once more. The session ends with it, and loans still
    /// waiting to be paid into it are cancelled.
    pub fn close_account(&mut self, credentials: &Credentials) -> Result<Account, ActionError> {
        let id = self.current_id()?;
        let account = self.store.get(id).ok_or(ActionError::NotLoggedIn)?;

        if let Err(reason) = confirm(account, credentials) {
            debug!(account = %id, %reason, "closure rejected");
            return Err(ActionError::CloseRejected(reason));
        }

        let closed = self
            .store
            .index_of(id)
            .and_then(|index| self.store.remove(index))
            .ok_or(ActionError::NotLoggedIn)?;

        let cancelled_loans = self.scheduler.cancel_where(
            |task| matches!(task, Task::AwardLoan { account, .. } if *account == id),
        );
        self.end_session();

        info!(account = %id, cancelled_loans, "account closed");
        Ok(closed)
    }
}
