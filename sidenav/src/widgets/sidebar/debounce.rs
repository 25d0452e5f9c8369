use std::time::{Duration, Instant};

use super::source::ToggleRequest;

/// Quiet period that must follow the last press of a burst.
pub(crate) const TOGGLE_DEBOUNCE_MS: u64 = 200;

/// Requests coalesced by one debounce window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ToggleBurst {
    pub(crate) latest: ToggleRequest,
    pub(crate) count: u32,
}

#[derive(Debug, Clone, Copy)]
struct PendingBurst {
    burst: ToggleBurst,
    deadline: Instant,
}

/// Trailing-edge debounce: each push reschedules the deadline and only the
/// latest request of a burst is emitted, once the window has been quiet.
#[derive(Debug)]
pub(super) struct Debouncer {
    window: Duration,
    pending: Option<PendingBurst>,
}

impl Debouncer {
    pub(super) fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    pub(super) fn push(&mut self, request: ToggleRequest) {
        let count = self
            .pending
            .map(|pending| pending.burst.count + 1)
            .unwrap_or(1);

        self.pending = Some(PendingBurst {
            burst: ToggleBurst {
                latest: request,
                count,
            },
            deadline: request.timestamp + self.window,
        });
    }

    /// Emit the pending burst when its deadline has passed.
    pub(super) fn poll(&mut self, now: Instant) -> Option<ToggleBurst> {
        match self.pending {
            Some(pending) if now >= pending.deadline => {
                self.pending = None;
                Some(pending.burst)
            },
            _ => None,
        }
    }

    pub(super) fn deadline(&self) -> Option<Instant> {
        self.pending.map(|pending| pending.deadline)
    }

    pub(super) fn is_pending(&self) -> bool {
        self.deadline().is_some()
    }

    pub(super) fn cancel(&mut self) {
        self.pending = None;
    }
}
