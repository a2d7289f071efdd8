//! Participant record for the matchmaking pool.
//!
//! ## Lifecycle
//!
//! A participant is created on admission and lives in the registry arena for
//! the process lifetime. It visits the seed heap until popped into a pairing,
//! at which point `paired` flips to true exactly once and never resets.
//!
//! ## Position Tracking
//!
//! While a participant is resident in the heap, `heap_slot` holds its index
//! in the heap's backing array. The heap updates this field on every swap,
//! so the value always matches the participant's true position. Once popped,
//! the field returns to `None`.

/// A participant waiting to be (or already) paired.
///
/// ## Fields
///
/// Identity and seed are immutable after creation. Lower seed means the
/// participant is paired earlier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    /// Opaque unique identity (assigned by the caller, never by the core)
    pub id: u64,

    /// Ordering key: lower seed = higher matchmaking priority
    pub seed: u64,

    /// True once the participant has been selected into a pairing.
    /// Set exactly once; never reset.
    pub paired: bool,

    /// Index into the heap's backing array while resident in the heap.
    /// None when the participant is not in the heap.
    pub heap_slot: Option<usize>,
}

impl Participant {
    /// Create a new unpaired participant, not yet in the heap
    ///
    /// # Arguments
    ///
    /// * `id` - Unique identity
    /// * `seed` - Ordering key (lower pairs first)
    ///
    /// # Example
    ///
    /// ```
    /// use matchpool::types::Participant;
    ///
    /// let p = Participant::new(101, 3);
    /// assert!(!p.paired);
    /// assert!(p.heap_slot.is_none());
    /// ```
    pub fn new(id: u64, seed: u64) -> Self {
        Self {
            id,
            seed,
            paired: false,
            heap_slot: None,
        }
    }

    /// Check whether the participant is waiting (registered, in the heap,
    /// not yet paired)
    #[inline]
    pub fn is_waiting(&self) -> bool {
        !self.paired && self.heap_slot.is_some()
    }

    /// Mark the participant as paired and clear its heap bookkeeping
    #[inline]
    pub fn mark_paired(&mut self) {
        self.paired = true;
        self.heap_slot = None;
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_participant_new() {
        let p = Participant::new(101, 3);

        assert_eq!(p.id, 101);
        assert_eq!(p.seed, 3);
        assert!(!p.paired);
        assert!(p.heap_slot.is_none());
        assert!(!p.is_waiting());
    }

    #[test]
    fn test_participant_waiting() {
        let mut p = Participant::new(101, 3);

        p.heap_slot = Some(0);
        assert!(p.is_waiting());
    }

    #[test]
    fn test_participant_mark_paired() {
        let mut p = Participant::new(101, 3);
        p.heap_slot = Some(4);

        p.mark_paired();

        assert!(p.paired);
        assert!(p.heap_slot.is_none());
        assert!(!p.is_waiting());
    }
}
