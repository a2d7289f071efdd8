//! Matchmaking scheduler orchestrating registry, heap, and ledger.
//!
//! ## Operations
//!
//! The scheduler exposes exactly two externally meaningful operations:
//!
//! - [`Scheduler::admit`]: register a participant and place it in the heap
//! - [`Scheduler::next_pairing`]: pop the two globally lowest seeds, mark
//!   them paired, and record the pairing
//!
//! The scheduler never drives itself: the caller decides how often to ask
//! for the next pairing (drain-all, interactive, on a timer). When fewer
//! than two participants are waiting, `next_pairing` returns `None`.
//!
//! ## Concurrency
//!
//! All methods take `&mut self`; heap mutation and position bookkeeping are
//! not atomic. Wrap the whole scheduler in a mutex (or a dedicated owning
//! task) for concurrent use — admission and pairing must be linearizable
//! with respect to each other.
//!
//! ## Example
//!
//! ```
//! use matchpool::scheduler::Scheduler;
//!
//! let mut scheduler = Scheduler::with_capacity(16);
//!
//! scheduler.admit(101, 3).unwrap();
//! scheduler.admit(102, 1).unwrap();
//! scheduler.admit(103, 2).unwrap();
//!
//! // The two globally lowest seeds pair first
//! let pairing = scheduler.next_pairing().unwrap();
//! assert_eq!(pairing.participants(), (102, 103));
//!
//! // One participant left: no pairing possible
//! assert!(scheduler.next_pairing().is_none());
//! ```

use tracing::{info, warn};

use crate::error::PoolError;
use crate::pool::{Ledger, Registry, SeedHeap};
use crate::types::{Pairing, PoolReceipt};

/// Scheduler owning the registry, seed heap, and pairing ledger.
///
/// Each scheduler is a fully independent matchmaking pool; construct one
/// per pool and hold it wherever the driver lives.
#[derive(Debug, Default)]
pub struct Scheduler {
    /// Owner of all participants
    registry: Registry,

    /// Waiting participants ordered by seed
    heap: SeedHeap,

    /// Produced pairings in order
    ledger: Ledger,
}

impl Scheduler {
    /// Create a new empty scheduler
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
            heap: SeedHeap::new(),
            ledger: Ledger::new(),
        }
    }

    /// Create a scheduler with pre-allocated capacity for `capacity`
    /// participants
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            registry: Registry::with_capacity(capacity),
            heap: SeedHeap::with_capacity(capacity),
            ledger: Ledger::new(),
        }
    }

    // ========================================================================
    // Admission
    // ========================================================================

    /// Admit a participant into the pool
    ///
    /// Registers the identity and pushes the participant onto the seed
    /// heap. A duplicate identity is rejected with no side effects on the
    /// heap or ledger.
    ///
    /// # Arguments
    ///
    /// * `id` - Unique identity
    /// * `seed` - Ordering key (lower pairs first)
    ///
    /// # Errors
    ///
    /// [`PoolError::DuplicateIdentity`] if the identity was already admitted
    pub fn admit(&mut self, id: u64, seed: u64) -> Result<(), PoolError> {
        let key = match self.registry.register(id, seed) {
            Ok(key) => key,
            Err(err) => {
                warn!(identity = id, "admission rejected: {err}");
                return Err(err);
            }
        };

        self.heap.push(key, self.registry.participants_mut());
        info!(identity = id, seed, "participant admitted");
        Ok(())
    }

    // ========================================================================
    // Pairing
    // ========================================================================

    /// Produce the next pairing, if at least two participants are waiting
    ///
    /// Pops the two globally lowest seeds, marks both paired, records the
    /// pairing in the ledger, and returns a copy of the record. Returns
    /// `None` when fewer than two participants remain — the terminal
    /// condition for a drain loop.
    pub fn next_pairing(&mut self) -> Option<Pairing> {
        if self.heap.len() < 2 {
            return None;
        }

        let first = self.heap.pop(self.registry.participants_mut())?;
        let second = match self.heap.pop(self.registry.participants_mut()) {
            Some(key) => key,
            None => {
                // Not reachable after the size check, but a popped
                // participant must never be dropped silently.
                self.heap.push(first, self.registry.participants_mut());
                return None;
            }
        };

        {
            let arena = self.registry.participants_mut();
            arena[first].mark_paired();
            arena[second].mark_paired();
        }

        let p1 = self.registry.get(first)?;
        let p2 = self.registry.get(second)?;
        let pairing = self.ledger.record(p1, p2).clone();

        info!(pairing = %pairing, "pairing produced");
        Some(pairing)
    }

    // ========================================================================
    // Inspection
    // ========================================================================

    /// Number of participants currently waiting in the heap
    #[inline]
    pub fn waiting(&self) -> usize {
        self.heap.len()
    }

    /// Total number of participants admitted so far
    #[inline]
    pub fn admitted(&self) -> usize {
        self.registry.len()
    }

    /// The pairing ledger
    #[inline]
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// The participant registry
    #[inline]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The seed heap (read-only; for diagnostics and tests)
    #[inline]
    pub fn heap(&self) -> &SeedHeap {
        &self.heap
    }

    /// Build a receipt summarizing the current state of the pool
    pub fn receipt(&self) -> PoolReceipt {
        PoolReceipt::new(
            self.registry.len() as u64,
            self.ledger.len() as u64,
            self.heap.len() as u64,
            self.ledger.compute_root(),
        )
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
