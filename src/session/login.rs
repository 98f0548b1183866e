use super::auth::{authenticate, Authentication, Credentials};
use super::timer::LogoutTimer;
use super::{ActionError, LoggedIn, Session, State};
use crate::bank::AccountId;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

impl Session {
    /// Log in with a username and pin.
    ///
    /// Whatever the outcome, whoever was logged in before isn't anymore.
    /// On success the countdown starts over and movements are shown
    /// newest first.
    pub fn login(
        &mut self,
        credentials: &Credentials,
        now: DateTime<Utc>,
    ) -> Result<AccountId, ActionError> {
        let authenticated = match authenticate(&self.store, credentials) {
            Authentication::Authenticated(account) => Ok(account.id()),
            Authentication::Rejected(reason) => Err(reason),
        };
        self.end_session();

        let account = match authenticated {
            Ok(account) => account,
            Err(reason) => {
                debug!(username = %credentials.username, %reason, "login rejected");
                return Err(ActionError::LoginRejected(reason));
            }
        };

        let timer = LogoutTimer::start(
            self.config.logout_after,
            self.config.tick,
            now,
            &mut self.scheduler,
        );
        self.state = State::LoggedIn(LoggedIn {
            account,
            since: now,
            timer,
        });
        self.sorted = false;

        info!(%account, "logged in");
        Ok(account)
    }
}
