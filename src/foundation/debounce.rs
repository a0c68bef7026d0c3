use std::time::{Duration, Instant};

/// Debounce window for flyer data writes.
pub const DATA_DEBOUNCE: Duration = Duration::from_millis(150);
/// Debounce window for theme writes.
pub const THEME_DEBOUNCE: Duration = Duration::from_millis(120);

/// Cancel-and-reschedule debounce.
///
/// Every [`Debounce::touch`] pushes the deadline out by the full window; the
/// caller polls [`Debounce::take_due`] from its event loop. The struct holds
/// no timer of its own, which keeps it deterministic under test (callers pass
/// explicit `now` values).
#[derive(Clone, Copy, Debug)]
pub struct Debounce {
    window: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    /// Record a change at `now`, rescheduling any pending deadline.
    pub fn touch(&mut self, now: Instant) {
        self.deadline = Some(now + self.window);
    }

    /// True while a flush is scheduled and not yet taken.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// If the deadline has passed, clear it and report `true` (fire once).
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(d) if d <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drop any scheduled flush without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

/// A debounced pending payload: the latest scheduled value wins.
#[derive(Clone, Debug)]
pub struct DebouncedSlot<T> {
    debounce: Debounce,
    pending: Option<T>,
}

impl<T> DebouncedSlot<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            debounce: Debounce::new(window),
            pending: None,
        }
    }

    /// Replace the pending payload and reschedule the flush deadline.
    pub fn schedule(&mut self, now: Instant, payload: T) {
        self.pending = Some(payload);
        self.debounce.touch(now);
    }

    /// Take the payload once its deadline has passed.
    pub fn take_due(&mut self, now: Instant) -> Option<T> {
        if self.debounce.take_due(now) {
            self.pending.take()
        } else {
            None
        }
    }

    /// Take the payload immediately, cancelling any scheduled flush.
    pub fn take_now(&mut self) -> Option<T> {
        self.debounce.cancel();
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/debounce.rs"]
mod tests;
