//! Request-generation tickets for coordinating overlapping requests

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic counter handing out request tickets.
///
/// Each operation on a resource takes a ticket with [`begin`]; responses are
/// applied only while the ticket [`is_current`]. Starting a new operation
/// invalidates every earlier ticket, so the last-started operation owns the
/// final `Update` and `Loading(false)` writes and a slow, stale response is
/// dropped instead of overwriting newer state.
///
/// [`begin`]: Self::begin
/// [`is_current`]: Self::is_current
#[derive(Debug, Clone, Default)]
pub struct RequestGeneration {
    counter: Arc<AtomicU64>,
}

impl RequestGeneration {
    /// Create a counter with no outstanding tickets.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, invalidating all earlier tickets.
    #[must_use]
    pub fn begin(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `ticket` belongs to the most recently started request.
    #[must_use]
    pub fn is_current(&self, ticket: u64) -> bool {
        self.counter.load(Ordering::SeqCst) == ticket
    }
}
