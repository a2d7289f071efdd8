//! Seed-ordered min-heap with per-participant position tracking.
//!
//! ## Architecture
//!
//! The heap is the algorithmic core of the pool. It stores slab keys into
//! the registry arena, ordered as a binary min-heap by participant seed:
//!
//! - 0-indexed backing `Vec<usize>`; parent `(i-1)/2`, children `2i+1`, `2i+2`
//! - `push` appends then sifts up; `pop` moves the last element to the root
//!   and sifts down
//! - Every swap writes both participants' `heap_slot` fields, so each
//!   resident participant always knows its true backing-array index
//!
//! The position bookkeeping is not needed by push/pop themselves; it is the
//! invariant that makes a future remove-by-key correct without external
//! pointer patching.
//!
//! ## Tie-break
//!
//! All comparisons are strict (`<`). On equal seeds the left child is
//! preferred during sift-down and an equal child never displaces its parent,
//! so pop order is deterministic.
//!
//! ## Example
//!
//! ```
//! use matchpool::pool::{Registry, SeedHeap};
//!
//! let mut registry = Registry::with_capacity(16);
//! let mut heap = SeedHeap::with_capacity(16);
//!
//! let a = registry.register(101, 3).unwrap();
//! let b = registry.register(102, 1).unwrap();
//!
//! heap.push(a, registry.participants_mut());
//! heap.push(b, registry.participants_mut());
//!
//! // Lowest seed pops first
//! assert_eq!(heap.pop(registry.participants_mut()), Some(b));
//! assert_eq!(heap.pop(registry.participants_mut()), Some(a));
//! assert_eq!(heap.pop(registry.participants_mut()), None);
//! ```

use slab::Slab;

use crate::types::Participant;

/// Binary min-heap of participant slab keys, ordered by seed.
///
/// The heap does not own participant data; every operation borrows the
/// registry arena so position fields can be kept consistent.
#[derive(Debug, Default)]
pub struct SeedHeap {
    /// Backing array of slab keys in heap order
    /// Invariant: seed(slots[i]) >= seed(slots[(i-1)/2]) for all i > 0
    slots: Vec<usize>,
}

impl SeedHeap {
    /// Create a new empty heap
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Create a heap with pre-allocated capacity
    ///
    /// Growth past the capacity is handled by the backing `Vec`
    /// (amortized doubling); allocation failure aborts the process.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
        }
    }

    // ========================================================================
    // Capacity and Size
    // ========================================================================

    /// Get the number of resident participants
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if the heap is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Get the current capacity of the backing array
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Raw view of the backing array (slab keys in heap order)
    #[inline]
    pub fn keys(&self) -> &[usize] {
        &self.slots
    }

    /// Get the backing-array index of a resident slab key, if any
    ///
    /// Linear scan; intended for diagnostics and tests. Resident
    /// participants carry the same value in their `heap_slot` field.
    pub fn slot_of(&self, key: usize) -> Option<usize> {
        self.slots.iter().position(|&k| k == key)
    }

    // ========================================================================
    // Core Operations
    // ========================================================================

    /// Push a participant onto the heap
    ///
    /// Appends at the end of the backing array, records the position in the
    /// participant's `heap_slot`, then sifts up. Amortized O(log n).
    ///
    /// # Arguments
    ///
    /// * `key` - Slab key of the participant to insert
    /// * `arena` - The registry arena holding all participants
    ///
    /// # Panics
    ///
    /// Panics if `key` is not present in the arena.
    pub fn push(&mut self, key: usize, arena: &mut Slab<Participant>) {
        let slot = self.slots.len();
        self.slots.push(key);
        arena[key].heap_slot = Some(slot);
        self.sift_up(slot, arena);
    }

    /// Pop the minimum-seed participant
    ///
    /// Removes the root, moves the last element into its place, and sifts
    /// down. The popped participant's `heap_slot` is cleared.
    ///
    /// # Returns
    ///
    /// The slab key of the minimum-seed participant, or `None` if empty
    pub fn pop(&mut self, arena: &mut Slab<Participant>) -> Option<usize> {
        if self.slots.is_empty() {
            return None;
        }

        let last = self.slots.len() - 1;
        self.slots.swap(0, last);
        // Infallible: the emptiness check above guarantees an element
        let top = self.slots.pop()?;

        if !self.slots.is_empty() {
            arena[self.slots[0]].heap_slot = Some(0);
            self.sift_down(0, arena);
        }

        arena[top].heap_slot = None;
        Some(top)
    }

    /// Peek at the minimum-seed participant without removing it
    #[inline]
    pub fn peek(&self) -> Option<usize> {
        self.slots.first().copied()
    }

    // ========================================================================
    // Sift Primitives
    // ========================================================================

    /// Seed of the participant stored at backing-array index `slot`
    #[inline]
    fn seed_at(&self, slot: usize, arena: &Slab<Participant>) -> u64 {
        arena[self.slots[slot]].seed
    }

    /// Swap two backing-array slots and update both position fields
    fn swap_slots(&mut self, i: usize, j: usize, arena: &mut Slab<Participant>) {
        self.slots.swap(i, j);
        arena[self.slots[i]].heap_slot = Some(i);
        arena[self.slots[j]].heap_slot = Some(j);
    }

    /// Restore the heap invariant upward from `slot`
    fn sift_up(&mut self, mut slot: usize, arena: &mut Slab<Participant>) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.seed_at(slot, arena) < self.seed_at(parent, arena) {
                self.swap_slots(slot, parent, arena);
                slot = parent;
            } else {
                break;
            }
        }
    }

    /// Restore the heap invariant downward from `slot`
    ///
    /// Swaps with the smaller child while that child's seed is strictly
    /// smaller; left child wins ties.
    fn sift_down(&mut self, mut slot: usize, arena: &mut Slab<Participant>) {
        loop {
            let left = 2 * slot + 1;
            let right = 2 * slot + 2;
            let mut smallest = slot;

            if left < self.slots.len() && self.seed_at(left, arena) < self.seed_at(smallest, arena)
            {
                smallest = left;
            }
            if right < self.slots.len()
                && self.seed_at(right, arena) < self.seed_at(smallest, arena)
            {
                smallest = right;
            }

            if smallest == slot {
                break;
            }
            self.swap_slots(slot, smallest, arena);
            slot = smallest;
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Registry;

    /// Build a registry + heap from (id, seed) pairs, pushing in order.
    fn build(entries: &[(u64, u64)]) -> (Registry, SeedHeap) {
        let mut registry = Registry::with_capacity(entries.len());
        let mut heap = SeedHeap::with_capacity(entries.len());
        for &(id, seed) in entries {
            let key = registry.register(id, seed).unwrap();
            heap.push(key, registry.participants_mut());
        }
        (registry, heap)
    }

    /// Assert the ordering and position invariants over the whole heap.
    fn assert_invariants(registry: &Registry, heap: &SeedHeap) {
        let arena = registry.participants();
        let keys = heap.keys();
        for (slot, &key) in keys.iter().enumerate() {
            // Position consistency
            assert_eq!(
                arena[key].heap_slot,
                Some(slot),
                "participant {} has stale heap_slot",
                arena[key].id
            );
            // Heap ordering
            if slot > 0 {
                let parent = keys[(slot - 1) / 2];
                assert!(
                    arena[key].seed >= arena[parent].seed,
                    "heap order violated at slot {}",
                    slot
                );
            }
        }
    }

    #[test]
    fn test_heap_new() {
        let heap = SeedHeap::new();

        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);
        assert!(heap.peek().is_none());
    }

    #[test]
    fn test_heap_push_pop_ordering() {
        let (mut registry, mut heap) =
            build(&[(101, 3), (102, 1), (103, 2), (104, 8), (105, 5)]);

        assert_invariants(&registry, &heap);

        // Pops come out in ascending seed order
        let mut seeds = Vec::new();
        while let Some(key) = heap.pop(registry.participants_mut()) {
            seeds.push(registry.get(key).unwrap().seed);
            assert_invariants(&registry, &heap);
        }

        assert_eq!(seeds, vec![1, 2, 3, 5, 8]);
    }

    #[test]
    fn test_heap_pop_empty() {
        let mut registry = Registry::new();
        let mut heap = SeedHeap::new();

        assert_eq!(heap.pop(registry.participants_mut()), None);
    }

    #[test]
    fn test_heap_pop_clears_slot() {
        let (mut registry, mut heap) = build(&[(101, 3), (102, 1)]);

        let key = heap.pop(registry.participants_mut()).unwrap();

        assert!(registry.get(key).unwrap().heap_slot.is_none());
        assert_eq!(heap.len(), 1);
    }

    #[test]
    fn test_heap_peek() {
        let (registry, heap) = build(&[(101, 3), (102, 1), (103, 2)]);

        let top = heap.peek().unwrap();
        assert_eq!(registry.get(top).unwrap().id, 102);
        assert_eq!(heap.len(), 3);
    }

    #[test]
    fn test_heap_positions_after_swaps() {
        // Descending seeds force a sift-up swap on every push
        let (registry, heap) = build(&[(1, 50), (2, 40), (3, 30), (4, 20), (5, 10)]);

        assert_invariants(&registry, &heap);
        assert_eq!(registry.get(heap.peek().unwrap()).unwrap().seed, 10);
    }

    #[test]
    fn test_heap_slot_of_matches_field() {
        let (registry, heap) = build(&[(101, 3), (102, 1), (103, 2), (104, 8)]);

        for &key in heap.keys() {
            assert_eq!(heap.slot_of(key), registry.get(key).unwrap().heap_slot);
        }
        assert!(heap.slot_of(999).is_none());
    }

    #[test]
    fn test_heap_equal_seed_tiebreak_prefers_left_child() {
        // All seeds equal: pushes cause no swaps, so slots are [1, 2, 3].
        // First pop removes 1 and moves 3 to the root; the equal left child
        // must not displace it, so the full pop order is fixed.
        let (mut registry, mut heap) = build(&[(1, 5), (2, 5), (3, 5)]);

        let mut ids = Vec::new();
        while let Some(key) = heap.pop(registry.participants_mut()) {
            ids.push(registry.get(key).unwrap().id);
        }

        assert_eq!(ids, vec![1, 3, 2]);
    }

    #[test]
    fn test_heap_equal_seed_pair_of_children_takes_left() {
        // Root seed 1, children both seed 5: after popping the root the
        // last element (left child's equal twin) lands at the root and the
        // strict comparison keeps the left child from swapping up.
        let (mut registry, mut heap) = build(&[(10, 1), (20, 5), (30, 5)]);

        assert_eq!(
            heap.pop(registry.participants_mut())
                .map(|k| registry.get(k).unwrap().id),
            Some(10)
        );
        assert_eq!(
            heap.pop(registry.participants_mut())
                .map(|k| registry.get(k).unwrap().id),
            Some(30)
        );
        assert_eq!(
            heap.pop(registry.participants_mut())
                .map(|k| registry.get(k).unwrap().id),
            Some(20)
        );
    }

    #[test]
    fn test_heap_growth_preserves_invariants() {
        // 20 pushes into a capacity-16 heap force at least one growth event
        let mut registry = Registry::with_capacity(16);
        let mut heap = SeedHeap::with_capacity(16);

        for i in 0..20u64 {
            // Alternate high/low seeds to exercise both sift directions
            let seed = if i % 2 == 0 { 100 - i } else { i };
            let key = registry.register(1000 + i, seed).unwrap();
            heap.push(key, registry.participants_mut());
            assert_invariants(&registry, &heap);
        }

        assert!(heap.capacity() > 16);
        assert_eq!(heap.len(), 20);
        assert_invariants(&registry, &heap);
    }

    #[test]
    fn test_heap_interleaved_push_pop() {
        let mut registry = Registry::with_capacity(32);
        let mut heap = SeedHeap::with_capacity(4);

        let seeds = [9u64, 4, 7, 1, 8, 2, 6, 3, 5, 0];
        for (i, &seed) in seeds.iter().enumerate() {
            let key = registry.register(i as u64, seed).unwrap();
            heap.push(key, registry.participants_mut());
            if i % 3 == 2 {
                heap.pop(registry.participants_mut());
            }
            assert_invariants(&registry, &heap);
        }
    }
}
