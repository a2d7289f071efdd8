//! Pool receipt summarizing a scheduling run.
//!
//! The PoolReceipt captures the counters and ledger root of a scheduler at a
//! point in time, so a downstream consumer can verify the pairing history
//! without replaying it.

use ssz_rs::prelude::*;

/// Receipt summarizing the state of a matchmaking pool.
///
/// ## Ledger Root
///
/// The 32-byte ledger root is a SHA-256 hash over the SSZ-encoded pairing
/// sequence in production order. Two schedulers fed the same admissions
/// produce the same root.
///
/// ## Example
///
/// ```
/// use matchpool::types::PoolReceipt;
///
/// let receipt = PoolReceipt::new(5, 2, 1, [0u8; 32]);
/// assert_eq!(receipt.participants_admitted, 5);
/// assert_eq!(receipt.ledger_root_hex().len(), 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct PoolReceipt {
    /// Number of participants admitted so far
    pub participants_admitted: u64,

    /// Number of pairings produced so far
    pub pairings_produced: u64,

    /// Number of participants still waiting in the heap
    pub waiting: u64,

    /// SHA-256 hash over the SSZ-encoded pairing ledger
    pub ledger_root: [u8; 32],
}

impl PoolReceipt {
    /// Create a new pool receipt
    ///
    /// # Arguments
    ///
    /// * `participants_admitted` - Count of admitted participants
    /// * `pairings_produced` - Count of produced pairings
    /// * `waiting` - Count of participants still in the heap
    /// * `ledger_root` - SHA-256 root of the pairing ledger
    pub fn new(
        participants_admitted: u64,
        pairings_produced: u64,
        waiting: u64,
        ledger_root: [u8; 32],
    ) -> Self {
        Self {
            participants_admitted,
            pairings_produced,
            waiting,
            ledger_root,
        }
    }

    /// Get the ledger root as a hex string
    pub fn ledger_root_hex(&self) -> String {
        hex::encode(self.ledger_root)
    }

    /// Check if this receipt represents an empty run (no admissions)
    pub fn is_empty(&self) -> bool {
        self.participants_admitted == 0
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
