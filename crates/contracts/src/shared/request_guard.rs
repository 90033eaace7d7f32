//! Stale-response guard for async page updates.
//!
//! Every fetch takes a ticket before it starts. When the response arrives it
//! is applied only if its ticket is still the latest one issued; issuing a
//! newer ticket (the user picked another batch) or invalidating the sequence
//! (the page unmounted) turns older responses into no-ops.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    current: Arc<AtomicU64>,
}

#[derive(Debug, Clone)]
pub struct RequestTicket {
    value: u64,
    sequence: Arc<AtomicU64>,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request, superseding any in flight.
    pub fn issue(&self) -> RequestTicket {
        let value = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        RequestTicket {
            value,
            sequence: Arc::clone(&self.current),
        }
    }

    /// Ticket that shares the latest value without superseding anything.
    /// Several can be outstanding at once; only [`invalidate`](Self::invalidate)
    /// or a later [`issue`](Self::issue) ends them.
    pub fn current(&self) -> RequestTicket {
        RequestTicket {
            value: self.current.load(Ordering::SeqCst),
            sequence: Arc::clone(&self.current),
        }
    }

    /// Drop every outstanding ticket.
    pub fn invalidate(&self) {
        self.current.fetch_add(1, Ordering::SeqCst);
    }
}

impl RequestTicket {
    pub fn is_current(&self) -> bool {
        self.sequence.load(Ordering::SeqCst) == self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_is_current() {
        let seq = RequestSequence::new();
        let batch_a = seq.issue();
        let batch_b = seq.issue();
        // A's response arrives after B was requested
        assert!(!batch_a.is_current());
        assert!(batch_b.is_current());
    }

    #[test]
    fn test_invalidate_on_unmount() {
        let seq = RequestSequence::new();
        let ticket = seq.issue();
        seq.invalidate();
        assert!(!ticket.is_current());
        assert!(seq.issue().is_current());
    }

    #[test]
    fn test_overlapping_deletes_both_apply_until_unmount() {
        let seq = RequestSequence::new();
        let delete_a = seq.current();
        let delete_b = seq.current();
        assert!(delete_a.is_current());
        assert!(delete_b.is_current());
        seq.invalidate();
        assert!(!delete_a.is_current());
        assert!(!delete_b.is_current());
    }

    #[test]
    fn test_clones_share_the_sequence() {
        let seq = RequestSequence::new();
        let ticket = seq.clone().issue();
        assert!(ticket.is_current());
        seq.issue();
        assert!(!ticket.is_current());
    }
}
