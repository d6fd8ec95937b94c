//! Cancellable single-shot debounce timer.
//!
//! Policy: the very first call passes through immediately so the initial
//! layout is not delayed. Every later call replaces the pending value and
//! pushes the deadline to `now + delay`; the value is released by
//! [`Debouncer::poll`] once the deadline has passed without another call.
//! Time is supplied by the caller, which keeps the timer deterministic.

use std::time::{Duration, Instant};

/// Leading-call plus trailing-edge debouncer.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
    leading_done: bool,
}

impl<T> Debouncer<T> {
    /// Create a debouncer with a trailing `delay`.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            leading_done: false,
        }
    }

    /// Create a debouncer with a delay in milliseconds.
    #[must_use]
    pub const fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    /// Feed a raw event.
    ///
    /// Returns the value when it should be applied right away (first call
    /// only); otherwise arms the timer and returns `None`.
    pub fn call(&mut self, value: T, now: Instant) -> Option<T> {
        if !self.leading_done {
            self.leading_done = true;
            return Some(value);
        }
        self.pending = Some((value, now + self.delay));
        None
    }

    /// Release the pending value if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match self.pending {
            Some((_, deadline)) if now >= deadline => self.pending.take().map(|(value, _)| value),
            _ => None,
        }
    }

    /// Drop the pending value, if any.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }

    /// Deadline of the pending value.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    /// Check if a trailing call is armed.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Trailing delay.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}
