//! Employee ID allocation
//!
//! IDs are plain integers handed out by an [`IdAllocator`] in construction
//! order. The allocator is threaded through every entity constructor, so two
//! allocators never share a sequence and tests can start from a known value.
//!
//! Allocation order, not wall-clock time, determines ID values.

use serde::Serialize;
use std::fmt;

/// Employee ID, unique within the allocator that issued it
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EmployeeId(u32);

impl EmployeeId {
    /// Returns the raw integer value
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Forward to u32 so width/alignment flags apply
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<EmployeeId> for u32 {
    fn from(id: EmployeeId) -> Self {
        id.0
    }
}

/// Monotonic ID source shared by every roster of a company
///
/// Hands out every `u32` value from its start up to and including
/// `u32::MAX`, after which it is exhausted.
#[derive(Debug, Default)]
pub struct IdAllocator {
    start: u64,
    next: u64,
}

impl IdAllocator {
    /// Creates an allocator whose first ID is 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an allocator whose first ID is `first`
    pub fn starting_at(first: u32) -> Self {
        Self {
            start: u64::from(first),
            next: u64::from(first),
        }
    }

    /// Returns the next ID and advances the counter
    ///
    /// # Panics
    ///
    /// Panics once `u32::MAX` has been issued, in debug and release builds alike.
    pub fn next_id(&mut self) -> EmployeeId {
        match self.peek() {
            Some(id) => {
                self.next += 1;
                id
            }
            None => panic!("employee ID space exhausted after {}", u32::MAX),
        }
    }

    /// Returns the ID the next call to [`next_id`](Self::next_id) will hand
    /// out, or `None` if the allocator is exhausted
    pub fn peek(&self) -> Option<EmployeeId> {
        u32::try_from(self.next).ok().map(EmployeeId)
    }

    /// Returns how many IDs have been issued so far
    pub fn issued(&self) -> u64 {
        self.next - self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_at_zero() {
        let mut ids = IdAllocator::new();

        assert_eq!(ids.next_id().value(), 0);
        assert_eq!(ids.next_id().value(), 1);
        assert_eq!(ids.issued(), 2);
    }

    #[test]
    fn peek_does_not_advance() {
        let mut ids = IdAllocator::new();

        assert_eq!(ids.peek(), ids.peek());
        let peeked = ids.peek();
        assert_eq!(Some(ids.next_id()), peeked);
    }

    #[test]
    fn starting_at_offsets_sequence() {
        let mut ids = IdAllocator::starting_at(100);

        assert_eq!(ids.next_id().value(), 100);
        assert_eq!(ids.issued(), 1);
    }

    #[test]
    fn issues_the_last_u32_then_reports_exhaustion() {
        let mut ids = IdAllocator::starting_at(u32::MAX);

        assert_eq!(ids.next_id().value(), u32::MAX);
        assert_eq!(ids.peek(), None);
        assert_eq!(ids.issued(), 1);
    }

    #[test]
    #[should_panic(expected = "employee ID space exhausted")]
    fn next_id_panics_when_exhausted() {
        let mut ids = IdAllocator::starting_at(u32::MAX);
        ids.next_id();
        ids.next_id();
    }

    #[test]
    fn allocators_are_independent() {
        let mut a = IdAllocator::new();
        let mut b = IdAllocator::new();

        a.next_id();
        a.next_id();

        assert_eq!(b.next_id().value(), 0);
    }

    #[test]
    fn display_honors_width() {
        let mut ids = IdAllocator::starting_at(7);
        let id = ids.next_id();

        assert_eq!(format!("{:>3}", id), "  7");
        assert_eq!(id.to_string(), "7");
    }

    #[test]
    fn serializes_as_plain_integer() {
        let mut ids = IdAllocator::starting_at(42);
        let json = serde_json::to_string(&ids.next_id()).unwrap();

        assert_eq!(json, "42");
    }

    proptest! {
        #[test]
        fn ids_are_gapless_and_strictly_increasing(start in 0u32..1_000_000, count in 0usize..200) {
            let mut ids = IdAllocator::starting_at(start);
            let issued: Vec<u32> = (0..count).map(|_| ids.next_id().value()).collect();

            for (offset, id) in issued.iter().enumerate() {
                prop_assert_eq!(*id, start + offset as u32);
            }
            prop_assert_eq!(ids.issued() as usize, count);
        }
    }
}
