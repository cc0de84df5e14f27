//! Sequence-numbered state slots.
//!
//! Session fields that are filled by network responses use a [`Slot`]
//! instead of a bare `Option`: every fetch gets a [`Ticket`] stamped with a
//! monotonically increasing sequence number, and a response only lands if
//! its ticket is still current. Mutations are therefore last-writer-wins per
//! field, and a slow response can never overwrite a field set by a newer
//! request.

/// Proof that a fetch was started against a particular slot generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// A single-value state slot with supersede-if-stale semantics.
#[derive(Debug, Clone, Default)]
pub struct Slot<T> {
    seq: u64,
    value: Option<T>,
}

impl<T> Slot<T> {
    pub fn new() -> Self {
        Self { seq: 0, value: None }
    }

    /// Start a new fetch: clears the held value so stale data is never
    /// displayed while the request is in flight, and returns the ticket the
    /// response must present.
    pub fn begin(&mut self) -> Ticket {
        self.seq += 1;
        self.value = None;
        Ticket(self.seq)
    }

    /// Apply a response. Returns `false` (and drops the value) when the
    /// ticket has been superseded by a newer `begin`.
    pub fn commit(&mut self, ticket: Ticket, value: T) -> bool {
        if ticket.0 != self.seq {
            return false;
        }
        self.value = Some(value);
        true
    }

    /// Discard the held value without starting a fetch.
    pub fn clear(&mut self) {
        self.seq += 1;
        self.value = None;
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_clears_previous_value() {
        let mut slot = Slot::new();
        let t1 = slot.begin();
        assert!(slot.commit(t1, "first"));
        assert_eq!(slot.get(), Some(&"first"));

        let _t2 = slot.begin();
        assert!(slot.is_empty(), "in-flight fetch must not show stale data");
    }

    #[test]
    fn test_stale_ticket_is_rejected() {
        let mut slot = Slot::new();
        let t1 = slot.begin();
        let t2 = slot.begin();

        assert!(!slot.commit(t1, "slow response"));
        assert!(slot.is_empty());

        assert!(slot.commit(t2, "current response"));
        assert_eq!(slot.get(), Some(&"current response"));
    }

    #[test]
    fn test_clear_invalidates_outstanding_ticket() {
        let mut slot = Slot::new();
        let t1 = slot.begin();
        slot.clear();
        assert!(!slot.commit(t1, "late"));
        assert!(slot.is_empty());
    }
}
