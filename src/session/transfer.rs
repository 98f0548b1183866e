use super::{ActionError, Session};
use crate::bank::{Amount, Username};

use chrono::{DateTime, Utc};
use tracing::{debug, info};

impl Session {
    /// Send money from the logged in account to the account named `to`.
    /// A successful transfer counts as activity: the countdown starts over.
    pub fn transfer(
        &mut self,
        to: &Username,
        amount: Amount,
        now: DateTime<Utc>,
    ) -> Result<(), ActionError> {
        let from = self.current_id()?;

        match self.store.transfer(from, to, amount, now) {
            Ok(receiver) => {
                info!(%from, to = %receiver, %amount, "transfer done");
                self.restart_timer(now);
                Ok(())
            }
            Err(reason) => {
                debug!(%from, to, %amount, %reason, "transfer rejected");
                Err(reason.into())
            }
        }
    }
}
