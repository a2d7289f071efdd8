//! Append-only ledger of produced pairings.
//!
//! ## Design
//!
//! The ledger assigns gapless identifiers starting at 1, in production
//! order, and supports only append and forward iteration. Recorded pairings
//! are never mutated or removed.
//!
//! ## Ledger Root
//!
//! [`Ledger::compute_root`] hashes the SSZ encoding of every pairing in
//! order with SHA-256. Identical pairing histories yield identical roots.

use sha2::{Digest, Sha256};

use crate::types::{Pairing, Participant};

/// Ordered, append-only record of all produced pairings.
#[derive(Debug)]
pub struct Ledger {
    /// Pairings in production order
    pairings: Vec<Pairing>,

    /// Identifier for the next pairing (starts at 1, gapless)
    next_pairing_id: u64,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Create a new empty ledger
    pub fn new() -> Self {
        Self {
            pairings: Vec::new(),
            next_pairing_id: 1,
        }
    }

    /// Get the number of recorded pairings
    #[inline]
    pub fn len(&self) -> usize {
        self.pairings.len()
    }

    /// Check if the ledger is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairings.is_empty()
    }

    /// The identifier the next pairing will receive
    #[inline]
    pub fn next_pairing_id(&self) -> u64 {
        self.next_pairing_id
    }

    /// Record a new pairing from two participant snapshots
    ///
    /// Assigns the next gapless identifier and appends. `p1` is the
    /// first-popped (lower seed) participant.
    ///
    /// # Returns
    ///
    /// A reference to the recorded pairing
    pub fn record(&mut self, p1: &Participant, p2: &Participant) -> &Pairing {
        let pairing = Pairing::new(self.next_pairing_id, p1.id, p1.seed, p2.id, p2.seed);
        self.next_pairing_id += 1;
        let index = self.pairings.len();
        self.pairings.push(pairing);
        &self.pairings[index]
    }

    /// Iterate over all pairings in production order
    pub fn iter(&self) -> impl Iterator<Item = &Pairing> {
        self.pairings.iter()
    }

    /// Get the most recently recorded pairing
    #[inline]
    pub fn last(&self) -> Option<&Pairing> {
        self.pairings.last()
    }

    /// Get a pairing by position (0-based, production order)
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Pairing> {
        self.pairings.get(index)
    }

    /// Compute the SHA-256 root over the SSZ-encoded pairing sequence
    ///
    /// The empty ledger hashes to the digest of the empty byte string.
    pub fn compute_root(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        for pairing in &self.pairings {
            // Pairing is a fixed-size container of u64s; encoding cannot fail
            let bytes = ssz_rs::serialize(pairing).expect("fixed-size SSZ container");
            hasher.update(&bytes);
        }
        let result = hasher.finalize();

        let mut root = [0u8; 32];
        root.copy_from_slice(&result);
        root
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
