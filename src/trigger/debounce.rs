use std::time::{Duration, Instant};

/// Quiet period after the last submission before a request is released.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(1000);

/// Single-slot, latest-wins request queue with trailing-edge debounce.
///
/// Every [`submit`](Self::submit) replaces the pending state and restarts the
/// quiet period. [`poll`](Self::poll) releases the pending state once no new
/// submission arrived for the whole quiet period. Superseded states are
/// dropped without ever being processed. Time is passed in by the caller.
#[derive(Debug)]
pub struct Debouncer<T> {
    quiet: Duration,
    pending: Option<(T, Instant)>,
    superseded: u64,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_PERIOD)
    }
}

impl<T> Debouncer<T> {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
            superseded: 0,
        }
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet
    }

    /// Queue `state`, replacing anything still pending.
    pub fn submit(&mut self, state: T, now: Instant) {
        if self.pending.replace((state, now)).is_some() {
            self.superseded += 1;
        }
    }

    /// Release the pending state if its quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, at)) if now.saturating_duration_since(*at) >= self.quiet => {
                self.pending.take().map(|(state, _)| state)
            }
            _ => None,
        }
    }

    /// Instant at which the pending state becomes ready.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, at)| *at + self.quiet)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the pending state, e.g. when the canvas is cleared.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(state, _)| state)
    }

    /// Number of submissions replaced before they were released.
    pub fn superseded(&self) -> u64 {
        self.superseded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn releases_only_after_quiet_period() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(ms(100));
        d.submit(1, t0);
        assert_eq!(d.poll(t0 + ms(99)), None);
        assert_eq!(d.deadline(), Some(t0 + ms(100)));
        assert_eq!(d.poll(t0 + ms(100)), Some(1));
        assert!(!d.is_pending());
        assert_eq!(d.poll(t0 + ms(500)), None);
    }

    #[test]
    fn latest_submission_wins_and_restarts_timer() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(ms(100));
        d.submit("a", t0);
        d.submit("b", t0 + ms(60));
        d.submit("c", t0 + ms(120));
        // 100ms after "a" but the timer was restarted
        assert_eq!(d.poll(t0 + ms(180)), None);
        assert_eq!(d.poll(t0 + ms(220)), Some("c"));
        assert_eq!(d.superseded(), 2);
    }

    #[test]
    fn cancel_drops_pending() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(ms(10));
        d.submit(5, t0);
        assert_eq!(d.cancel(), Some(5));
        assert_eq!(d.poll(t0 + ms(50)), None);
    }

    #[test]
    fn default_uses_one_second() {
        let d: Debouncer<()> = Debouncer::default();
        assert_eq!(d.quiet_period(), ms(1000));
    }
}
