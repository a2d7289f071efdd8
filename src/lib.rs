//! # matchpool
//!
//! Seed-ordered matchmaking scheduler with a position-tracked min-heap.
//!
//! ## Architecture
//!
//! The core consists of:
//! - **Types**: Core data structures (Participant, Pairing, PoolReceipt)
//! - **Pool**: Registry arena, seed heap, and pairing ledger
//! - **Scheduler**: The two public operations, admit and next-pairing
//!
//! ## Design Principles
//!
//! 1. **Determinism**: Identical admission sequences produce identical
//!    pairings and an identical ledger root
//! 2. **Strict Seed Ordering**: Every pairing takes the two globally
//!    lowest-seed participants at the moment of the call
//! 3. **Arena + Index**: Participants live in a slab arena; the heap and
//!    ledger refer to them by key, and each resident participant tracks its
//!    own heap position
//! 4. **Synchronous Execution**: No operation suspends or blocks; every
//!    call completes in O(log n)
//!
//! ## Example
//!
//! ```
//! use matchpool::Scheduler;
//!
//! let mut scheduler = Scheduler::with_capacity(16);
//! scheduler.admit(101, 3).unwrap();
//! scheduler.admit(102, 1).unwrap();
//! scheduler.admit(103, 2).unwrap();
//!
//! let pairing = scheduler.next_pairing().unwrap();
//! assert_eq!(pairing.participants(), (102, 103));
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Participant, Pairing, PoolReceipt
pub mod types;

/// Pool structures: registry arena, seed heap, pairing ledger
pub mod pool;

/// Scheduler: admission and pairing orchestration
pub mod scheduler;

/// Error taxonomy
pub mod error;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use error::PoolError;
pub use pool::{Ledger, Registry, SeedHeap};
pub use scheduler::Scheduler;
pub use types::{Pairing, Participant, PoolReceipt};
