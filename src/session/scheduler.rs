use chrono::{DateTime, Utc};

/// Identifies a scheduled task, so it can be cancelled later on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskHandle(u64);

struct Scheduled<T> {
    handle: TaskHandle,
    due: DateTime<Utc>,
    task: T,
}

/// Tasks waiting for their time to come.
///
/// The scheduler never looks at the clock: whoever drives it asks for the
/// tasks due at a given instant. Tasks come out earliest first; tasks due at
/// the same instant come out in the order they were scheduled.
pub struct Scheduler<T> {
    tasks: Vec<Scheduled<T>>,
    next_handle: u64,
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_handle: 0,
        }
    }

    pub fn schedule(&mut self, due: DateTime<Utc>, task: T) -> TaskHandle {
        self.next_handle += 1;
        let handle = TaskHandle(self.next_handle);
        self.tasks.push(Scheduled { handle, due, task });

        handle
    }

    /// Returns false if the task already ran, or was already cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|scheduled| scheduled.handle != handle);

        self.tasks.len() != before
    }

    /// Cancel every task matching `predicate`, and return how many there were.
    pub fn cancel_where(&mut self, predicate: impl Fn(&T) -> bool) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|scheduled| !predicate(&scheduled.task));

        before - self.tasks.len()
    }

    /// When the next task is due, if there is any.
    pub fn next_due(&self) -> Option<DateTime<Utc>> {
        self.tasks.iter().map(|scheduled| scheduled.due).min()
    }

    /// Take out the next task due at or before `now`.
    pub fn pop_due(&mut self, now: DateTime<Utc>) -> Option<(TaskHandle, DateTime<Utc>, T)> {
        let (index, _) = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, scheduled)| scheduled.due <= now)
            .min_by_key(|(_, scheduled)| (scheduled.due, scheduled.handle))?;

        let Scheduled { handle, due, task } = self.tasks.remove(index);
        Some((handle, due, task))
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Scheduler;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn at(seconds: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 14, 5, 0).unwrap() + Duration::seconds(seconds)
    }

    #[test]
    fn test_pop_due_in_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(at(3), "third");
        scheduler.schedule(at(1), "first");
        scheduler.schedule(at(2), "second");
        scheduler.schedule(at(2), "second, scheduled later");
        scheduler.schedule(at(10), "not yet");

        assert_eq!(Some(at(1)), scheduler.next_due());

        let mut fired = vec![];
        while let Some((_, _, task)) = scheduler.pop_due(at(3)) {
            fired.push(task);
        }
        assert_eq!(
            vec!["first", "second", "second, scheduled later", "third"],
            fired
        );
        assert_eq!(1, scheduler.len());
        assert_eq!(Some(at(10)), scheduler.next_due());
    }

    #[test]
    fn test_nothing_due() {
        let mut scheduler = Scheduler::new();
        assert!(scheduler.pop_due(at(0)).is_none());
        assert!(scheduler.next_due().is_none());

        scheduler.schedule(at(1), ());
        assert!(scheduler.pop_due(at(0)).is_none());
        assert!(scheduler.pop_due(at(1)).is_some());
    }

    #[test]
    fn test_cancel() {
        let mut scheduler = Scheduler::new();
        let handle = scheduler.schedule(at(1), "cancelled");
        scheduler.schedule(at(2), "kept");

        assert!(scheduler.cancel(handle));
        assert!(!scheduler.cancel(handle));

        let (_, due, task) = scheduler.pop_due(at(5)).unwrap();
        assert_eq!((at(2), "kept"), (due, task));
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_cancel_where() {
        let mut scheduler = Scheduler::new();
        for n in 1..=5 {
            scheduler.schedule(at(n), n);
        }

        assert_eq!(2, scheduler.cancel_where(|n| n % 2 == 0));
        assert_eq!(3, scheduler.len());
    }
}
