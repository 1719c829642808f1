//! Coalesces bursts of setting changes into one write.
use std::time::Duration;
use tokio::time::Instant;

#[derive(Debug, Clone)]
pub struct DelayedSave {
    delay: Duration,
    deadline: Option<Instant>,
}

impl DelayedSave {
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// (Re)start the quiet period from `now`.
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Clears the deadline and returns true once it has passed.
    pub fn take_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(3000);

    #[test]
    fn nothing_is_due_before_scheduling() {
        let mut save = DelayedSave::new(DELAY);
        assert!(!save.take_if_due(Instant::now()));
    }

    #[test]
    fn every_change_restarts_the_quiet_period() {
        let start = Instant::now();
        let mut save = DelayedSave::new(DELAY);
        save.schedule(start);
        save.schedule(start + Duration::from_millis(2000));

        assert!(!save.take_if_due(start + Duration::from_millis(3000)));
        assert!(save.take_if_due(start + Duration::from_millis(5000)));
        // One write per burst.
        assert!(!save.take_if_due(start + Duration::from_millis(9000)));
    }

    #[test]
    fn cancel_drops_the_pending_write() {
        let start = Instant::now();
        let mut save = DelayedSave::new(DELAY);
        save.schedule(start);
        save.cancel();
        assert!(!save.is_pending());
        assert!(!save.take_if_due(start + DELAY));
    }
}
