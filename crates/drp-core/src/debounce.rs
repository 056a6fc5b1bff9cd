//! Debounced reparse of free-text input.

use std::time::{Duration, Instant};

/// Holds the latest typed text until the user pauses.
///
/// Each call to [`schedule`](Self::schedule) supersedes the previous text and
/// restarts the delay. The host drives time by passing `now` in.
#[derive(Debug, Clone)]
pub struct InputDebouncer {
    delay: Duration,
    pending: Option<String>,
    last_change: Option<Instant>,
}

impl InputDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            last_change: None,
        }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record new text typed at `now`.
    pub fn schedule(&mut self, text: impl Into<String>, now: Instant) {
        self.pending = Some(text.into());
        self.last_change = Some(now);
    }

    /// Release the pending text once `delay` has passed since the last change.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let last_change = self.last_change?;
        if now.saturating_duration_since(last_change) < self.delay {
            return None;
        }
        self.last_change = None;
        self.pending.take()
    }

    /// Drop pending text without releasing it.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.last_change = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_debouncer_is_idle() {
        let mut debouncer = InputDebouncer::from_millis(300);
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.poll(Instant::now()), None);
    }

    #[test]
    fn releases_after_delay() {
        let start = Instant::now();
        let mut debouncer = InputDebouncer::from_millis(300);
        debouncer.schedule("2024-03-01", start);
        assert_eq!(debouncer.poll(start + Duration::from_millis(299)), None);
        assert_eq!(
            debouncer.poll(start + Duration::from_millis(300)).as_deref(),
            Some("2024-03-01")
        );
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn later_text_supersedes_earlier() {
        let start = Instant::now();
        let mut debouncer = InputDebouncer::from_millis(300);
        debouncer.schedule("2024-03", start);
        debouncer.schedule("2024-03-0", start + Duration::from_millis(200));
        assert_eq!(debouncer.poll(start + Duration::from_millis(400)), None);
        assert_eq!(
            debouncer.poll(start + Duration::from_millis(500)).as_deref(),
            Some("2024-03-0")
        );
    }

    #[test]
    fn cancel_drops_text() {
        let start = Instant::now();
        let mut debouncer = InputDebouncer::from_millis(0);
        debouncer.schedule("x", start);
        debouncer.cancel();
        assert_eq!(debouncer.poll(start), None);
    }
}
