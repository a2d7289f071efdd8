//! Core data types for matchpool
//!
//! ## Types
//!
//! - [`Participant`]: A waiting or paired pool member
//! - [`Pairing`]: A produced match between two participants
//! - [`PoolReceipt`]: Summary of a scheduling run with a ledger root
//!
//! ## Determinism
//!
//! [`Pairing`] and [`PoolReceipt`] implement SSZ serialization so the ledger
//! digest is identical for identical admission sequences.

mod participant;
mod pairing;
mod receipt;

// Re-export all types at module level
pub use participant::Participant;
pub use pairing::Pairing;
pub use receipt::PoolReceipt;
