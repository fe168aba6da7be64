//! Debounced autosave scheduling.
//!
//! The engine never talks to a backend itself; it only decides *when* the
//! host should hand the current snapshot to the persistence client. Rapid
//! commits re-arm a single deadline so a burst of edits coalesces into one
//! save. The caller supplies the clock, which keeps the debouncer
//! deterministic under test and the engine free of timer threads.
//!
//! The deadline must be cancelled on editor teardown so a save never fires
//! against a torn-down editor.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct SaveDebouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl SaveDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self { delay, deadline: None }
    }

    /// Note a committed change at `now`: (re-)arm the deadline to
    /// `now + delay`.
    pub fn note_change(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Returns `true` exactly once per armed deadline, as soon as `now`
    /// has reached it.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Disarm any pending save.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(500);

    #[test]
    fn fires_after_the_delay_not_before() {
        let t0 = Instant::now();
        let mut debouncer = SaveDebouncer::new(DELAY);
        debouncer.note_change(t0);

        assert!(!debouncer.poll(t0 + Duration::from_millis(499)));
        assert!(debouncer.poll(t0 + DELAY));
    }

    #[test]
    fn fires_at_most_once_per_arming() {
        let t0 = Instant::now();
        let mut debouncer = SaveDebouncer::new(DELAY);
        debouncer.note_change(t0);

        assert!(debouncer.poll(t0 + DELAY));
        assert!(!debouncer.poll(t0 + DELAY * 2));
    }

    #[test]
    fn rapid_changes_coalesce_into_one_deadline() {
        let t0 = Instant::now();
        let mut debouncer = SaveDebouncer::new(DELAY);

        debouncer.note_change(t0);
        debouncer.note_change(t0 + Duration::from_millis(100));
        debouncer.note_change(t0 + Duration::from_millis(200));

        // First deadline (t0 + 500) has been pushed out by the re-arms.
        assert!(!debouncer.poll(t0 + Duration::from_millis(500)));
        assert!(debouncer.poll(t0 + Duration::from_millis(700)));
    }

    #[test]
    fn cancel_suppresses_a_pending_save() {
        let t0 = Instant::now();
        let mut debouncer = SaveDebouncer::new(DELAY);
        debouncer.note_change(t0);
        assert!(debouncer.is_pending());

        debouncer.cancel();
        assert!(!debouncer.is_pending());
        assert!(!debouncer.poll(t0 + DELAY * 10));
    }

    #[test]
    fn idle_debouncer_never_fires() {
        let mut debouncer = SaveDebouncer::new(DELAY);
        assert!(!debouncer.poll(Instant::now() + Duration::from_secs(60)));
    }
}
