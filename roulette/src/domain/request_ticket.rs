//! Monotonic request tickets used to discard stale completions.
//!
//! None of the asynchronous capabilities can be cancelled. Each request is
//! tagged with a ticket instead, and only a completion carrying the latest
//! ticket issued for its capability may touch application state.

use std::fmt;

/// Identifier attached to one outstanding request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestTicket(u64);

impl fmt::Display for RequestTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Per-capability ticket counter.
///
/// # Examples
/// ```
/// use roulette::domain::RequestSequence;
///
/// let mut sequence = RequestSequence::default();
/// let first = sequence.issue();
/// let second = sequence.issue();
/// assert!(!sequence.is_current(first));
/// assert!(sequence.is_current(second));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    /// Issue a new ticket, making every earlier ticket stale.
    pub fn issue(&mut self) -> RequestTicket {
        self.latest = self.latest.saturating_add(1);
        RequestTicket(self.latest)
    }

    /// Make every outstanding ticket stale without issuing a new one.
    pub fn supersede(&mut self) {
        self.latest = self.latest.saturating_add(1);
    }

    /// Whether `ticket` is the most recently issued one.
    #[must_use]
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }
}
