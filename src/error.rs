//! Error taxonomy for the matchmaking pool.
//!
//! Only admission can fail recoverably. An empty heap is not an error:
//! [`Scheduler::next_pairing`](crate::scheduler::Scheduler::next_pairing)
//! returns `None` as the clean terminal signal. Allocation exhaustion during
//! heap growth aborts the process rather than continuing with a corrupt
//! structure.

use thiserror::Error;

/// Errors produced by pool operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    /// Admission of an identity that is already registered.
    ///
    /// Recovered locally: the existing participant and all heap/ledger
    /// state are untouched.
    #[error("participant with identity {identity} already exists")]
    DuplicateIdentity {
        /// The offending identity
        identity: u64,
    },
}

// ============================================================================
// Unit Tests
// ============================================================================
