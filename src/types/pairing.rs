//! Pairing type representing one produced match between two participants.
//!
//! ## SSZ Serialization
//!
//! Pairings are serialized using SSZ for deterministic encoding. The ledger
//! root is computed over these bytes, so the layout must stay fixed.

use std::fmt;

use ssz_rs::prelude::*;

/// A pairing records a single match between the two lowest-seed participants
/// at the moment of production.
///
/// ## Identifier
///
/// Pairing ids start at 1 and increase by exactly one per pairing, in
/// production order. The id is a temporal key, not a causal one.
///
/// ## Snapshots
///
/// The identity and seed of both participants are copied into the pairing so
/// the record stays meaningful without a registry lookup. By convention `p1`
/// is the first participant popped (the strictly-or-equally lower seed).
///
/// ## Example
///
/// ```
/// use matchpool::types::Pairing;
///
/// let pairing = Pairing::new(1, 102, 1, 103, 2);
/// assert_eq!(pairing.to_string(), "Pairing 1: 102(seed 1) vs 103(seed 2)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct Pairing {
    /// Unique pairing identifier (assigned by the ledger, gapless from 1)
    pub id: u64,

    /// Identity of the first participant (popped first, lowest seed)
    pub p1_id: u64,

    /// Seed of the first participant
    pub p1_seed: u64,

    /// Identity of the second participant
    pub p2_id: u64,

    /// Seed of the second participant
    pub p2_seed: u64,
}

impl Pairing {
    /// Create a new pairing
    ///
    /// # Arguments
    ///
    /// * `id` - Pairing identifier
    /// * `p1_id` / `p1_seed` - Identity and seed of the first-popped participant
    /// * `p2_id` / `p2_seed` - Identity and seed of the second-popped participant
    pub fn new(id: u64, p1_id: u64, p1_seed: u64, p2_id: u64, p2_seed: u64) -> Self {
        Self {
            id,
            p1_id,
            p1_seed,
            p2_id,
            p2_seed,
        }
    }

    /// The identities of both participants, in pop order
    #[inline]
    pub fn participants(&self) -> (u64, u64) {
        (self.p1_id, self.p2_id)
    }

    /// Check whether the given identity is part of this pairing
    #[inline]
    pub fn involves(&self, id: u64) -> bool {
        self.p1_id == id || self.p2_id == id
    }
}

impl fmt::Display for Pairing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pairing {}: {}(seed {}) vs {}(seed {})",
            self.id, self.p1_id, self.p1_seed, self.p2_id, self.p2_seed
        )
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
