//! Participant registry with slab-backed arena storage.
//!
//! ## Architecture
//!
//! The registry is the exclusive owner of all [`Participant`] records:
//!
//! - **Slab**: Pre-allocated arena; every participant gets a stable `usize`
//!   key for the process lifetime (participants are never removed)
//! - **HashMap**: Identity to slab key mapping for O(1) duplicate detection
//!
//! The heap and ledger refer to participants only through slab keys, so the
//! registry hands out `&mut Slab<Participant>` for their bookkeeping.
//!
//! ## Memory Model
//!
//! Per slab docs (https://docs.rs/slab/0.4.11):
//! - `Slab::with_capacity(n)` pre-allocates n slots
//! - O(1) insert and lookup
//!
//! ## Example
//!
//! ```
//! use matchpool::pool::Registry;
//!
//! let mut registry = Registry::with_capacity(16);
//!
//! let key = registry.register(101, 3).unwrap();
//! assert_eq!(registry.get(key).unwrap().seed, 3);
//!
//! // Duplicate identities are rejected
//! assert!(registry.register(101, 7).is_err());
//! assert_eq!(registry.len(), 1);
//! ```

use std::collections::HashMap;

use slab::Slab;

use crate::error::PoolError;
use crate::types::Participant;

/// Registry owning all participants, keyed by identity.
///
/// No other component may create participants; admission goes through
/// [`Registry::register`].
#[derive(Debug, Default)]
pub struct Registry {
    /// Pre-allocated participant storage
    /// Key: slab index, Value: Participant
    participants: Slab<Participant>,

    /// Identity to slab key mapping (for O(1) duplicate detection)
    identity_index: HashMap<u64, usize>,
}

impl Registry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            participants: Slab::new(),
            identity_index: HashMap::new(),
        }
    }

    /// Create a registry with pre-allocated capacity
    ///
    /// # Arguments
    ///
    /// * `capacity` - Number of participants to pre-allocate
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            participants: Slab::with_capacity(capacity),
            identity_index: HashMap::with_capacity(capacity),
        }
    }

    // ========================================================================
    // Capacity and Size
    // ========================================================================

    /// Get the current capacity (pre-allocated slots)
    #[inline]
    pub fn capacity(&self) -> usize {
        self.participants.capacity()
    }

    /// Get the number of registered participants
    #[inline]
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    /// Check if the registry is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    // ========================================================================
    // Registration
    // ========================================================================

    /// Register a new participant
    ///
    /// Fails if a participant with the same identity already exists; the
    /// registry is left untouched in that case.
    ///
    /// # Arguments
    ///
    /// * `id` - Unique identity
    /// * `seed` - Ordering key (lower pairs first)
    ///
    /// # Returns
    ///
    /// The slab key for the new participant
    ///
    /// # Errors
    ///
    /// [`PoolError::DuplicateIdentity`] if the identity is already registered
    pub fn register(&mut self, id: u64, seed: u64) -> Result<usize, PoolError> {
        if self.identity_index.contains_key(&id) {
            return Err(PoolError::DuplicateIdentity { identity: id });
        }

        let key = self.participants.insert(Participant::new(id, seed));
        self.identity_index.insert(id, key);
        Ok(key)
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Look up a participant by identity
    #[inline]
    pub fn lookup(&self, id: u64) -> Option<&Participant> {
        let key = *self.identity_index.get(&id)?;
        self.participants.get(key)
    }

    /// Check if an identity is registered
    #[inline]
    pub fn contains(&self, id: u64) -> bool {
        self.identity_index.contains_key(&id)
    }

    /// Get the slab key for an identity
    #[inline]
    pub fn key_of(&self, id: u64) -> Option<usize> {
        self.identity_index.get(&id).copied()
    }

    /// Get a reference to a participant by slab key
    #[inline]
    pub fn get(&self, key: usize) -> Option<&Participant> {
        self.participants.get(key)
    }

    /// Get a mutable reference to a participant by slab key
    #[inline]
    pub fn get_mut(&mut self, key: usize) -> Option<&mut Participant> {
        self.participants.get_mut(key)
    }

    // ========================================================================
    // Arena Access (for the heap's position bookkeeping)
    // ========================================================================

    /// Get a reference to the participant arena
    #[inline]
    pub fn participants(&self) -> &Slab<Participant> {
        &self.participants
    }

    /// Get a mutable reference to the participant arena
    #[inline]
    pub fn participants_mut(&mut self) -> &mut Slab<Participant> {
        &mut self.participants
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
