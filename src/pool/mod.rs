//! Matchmaking pool data structures.
//!
//! ## Components
//!
//! - [`Registry`]: slab-backed arena owning every participant, with an
//!   identity index for O(1) duplicate detection
//! - [`SeedHeap`]: position-tracked binary min-heap over registry slab keys
//! - [`Ledger`]: append-only pairing history with gapless identifiers
//!
//! The three structures are tightly coupled: the heap and ledger refer to
//! participants only through registry slab keys, and the heap borrows the
//! registry arena to keep per-participant position fields consistent.

pub mod heap;
pub mod ledger;
pub mod registry;

pub use heap::SeedHeap;
pub use ledger::Ledger;
pub use registry::Registry;
