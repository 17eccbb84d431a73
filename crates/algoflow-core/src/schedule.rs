//! Cancellable single-slot tick scheduling on a virtual clock.
//!
//! A simulation never owns a real timer. It owns a [`TickHandle`] holding at
//! most one pending deadline; whoever drives the session (a test with a fake
//! clock, or the server's socket loop) calls `advance_to(now)` and due ticks
//! fire in order. Cancelling clears the slot synchronously, so nothing can
//! fire into a view that has been torn down.

use std::time::Duration;

/// Owner of the one outstanding tick of a simulation.
#[derive(Debug, Default)]
pub struct TickHandle {
    pending: Option<Duration>,
}

impl TickHandle {
    /// A handle with nothing scheduled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule the next tick at `due`, replacing any pending one.
    pub fn schedule(&mut self, due: Duration) {
        self.pending = Some(due);
    }

    /// Drop the pending tick. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Whether a tick is waiting to fire.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Deadline of the pending tick.
    pub fn due(&self) -> Option<Duration> {
        self.pending
    }

    /// Remove and return the pending deadline if it is due at `now`.
    pub fn take_due(&mut self, now: Duration) -> Option<Duration> {
        match self.pending {
            Some(due) if due <= now => {
                self.pending = None;
                Some(due)
            }
            _ => None,
        }
    }
}
