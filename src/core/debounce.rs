use std::time::{
    Duration,
    Instant,
};

/// Quiescence window for search input.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(300);

/// Single-slot trailing-edge debounce. Scheduling a value replaces any
/// pending one; `poll` hands the value out once the window has elapsed
/// with no further schedules. Time comes in from the caller so the
/// frame loop drives this and tests can fabricate it.
pub struct Debouncer {
    pending: Option<(String, Instant)>,
    window: Duration,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::with_window(DEBOUNCE_WINDOW)
    }

    pub fn with_window(window: Duration) -> Self {
        Self { pending: None, window }
    }

    pub fn schedule(&mut self, value: String, now: Instant) {
        self.pending = Some((value, now));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some((_, scheduled_at)) if now.duration_since(*scheduled_at) >= self.window => {
                self.pending.take().map(|(value, _)| value)
            }
            _ => None,
        }
    }

    /// When the pending value will become due, for repaint scheduling.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, scheduled_at)| *scheduled_at + self.window)
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}
