use super::scheduler::{Scheduler, TaskHandle};
use super::Task;
use crate::format::format_countdown;

use chrono::{DateTime, Duration, Utc};

/// Counts down to the automatic logout, one tick at a time.
///
/// The timer only ever has one tick scheduled: each tick schedules the next
/// one, until the countdown reaches zero.
#[derive(Debug)]
pub struct LogoutTimer {
    remaining: u32,
    tick: Duration,
    handle: TaskHandle,
}

/// What a tick did to the countdown.
#[derive(Debug, PartialEq, Eq)]
pub enum Countdown {
    Running(u32),
    Expired,
}

impl LogoutTimer {
    /// Start counting down from `seconds`, ticking every `tick`.
    pub fn start(
        seconds: u32,
        tick: Duration,
        now: DateTime<Utc>,
        scheduler: &mut Scheduler<Task>,
    ) -> Self {
        // A timer started at zero expires straight away.
        let first_tick = if seconds == 0 { now } else { now + tick };

        Self {
            remaining: seconds,
            tick,
            handle: scheduler.schedule(first_tick, Task::LogoutTick),
        }
    }

    /// Whether `handle` is this timer's pending tick.
    pub fn owns(&self, handle: TaskHandle) -> bool {
        self.handle == handle
    }

    /// Count one tick down. `due` is when the tick was scheduled for; the
    /// next one is scheduled relative to it, so a late tick doesn't push the
    /// logout back.
    pub fn tick(&mut self, due: DateTime<Utc>, scheduler: &mut Scheduler<Task>) -> Countdown {
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            return Countdown::Expired;
        }

        self.handle = scheduler.schedule(due + self.tick, Task::LogoutTick);
        Countdown::Running(self.remaining)
    }

    /// Stop the timer for good.
    pub fn cancel(&self, scheduler: &mut Scheduler<Task>) {
        scheduler.cancel(self.handle);
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// `MM:SS`
    pub fn label(&self) -> String {
        format_countdown(self.remaining)
    }
}

#[cfg(test)]
mod timer_tests {
    use super::{Countdown, LogoutTimer};
    use crate::session::{scheduler::Scheduler, Task};

    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 14, 5, 0).unwrap()
    }

    #[test]
    fn test_countdown_to_expiry() {
        let mut scheduler = Scheduler::new();
        let mut timer = LogoutTimer::start(3, Duration::seconds(1), now(), &mut scheduler);
        assert_eq!("00:03", timer.label());
        assert_eq!(Some(now() + Duration::seconds(1)), scheduler.next_due());

        let mut got = vec![];
        while let Some((handle, due, task)) = scheduler.pop_due(now() + Duration::seconds(60)) {
            assert_eq!(Task::LogoutTick, task);
            assert!(timer.owns(handle));
            got.push((due, timer.tick(due, &mut scheduler)));
        }

        assert_eq!(
            vec![
                (now() + Duration::seconds(1), Countdown::Running(2)),
                (now() + Duration::seconds(2), Countdown::Running(1)),
                (now() + Duration::seconds(3), Countdown::Expired),
            ],
            got
        );
        assert_eq!("00:00", timer.label());
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_default_countdown_label() {
        let mut scheduler = Scheduler::new();
        let mut timer = LogoutTimer::start(600, Duration::seconds(1), now(), &mut scheduler);
        assert_eq!("10:00", timer.label());

        let (_, due, _) = scheduler.pop_due(now() + Duration::seconds(1)).unwrap();
        timer.tick(due, &mut scheduler);
        assert_eq!("09:59", timer.label());
    }

    #[test]
    fn test_cancel() {
        let mut scheduler = Scheduler::new();
        let timer = LogoutTimer::start(600, Duration::seconds(1), now(), &mut scheduler);

        timer.cancel(&mut scheduler);
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_zero_expires_immediately() {
        let mut scheduler = Scheduler::new();
        let mut timer = LogoutTimer::start(0, Duration::seconds(1), now(), &mut scheduler);

        let (_, due, _) = scheduler.pop_due(now()).expect("tick due now");
        assert_eq!(Countdown::Expired, timer.tick(due, &mut scheduler));
    }
}
