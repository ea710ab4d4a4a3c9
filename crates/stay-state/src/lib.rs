//! World-state abstraction for StayLedger.
//!
//! The contracts in `stay-contract` never talk to a ledger directly. They
//! consume the [`WorldState`] capability: an ordered key-value snapshot with
//! get, put, delete, and ascending lexicographic range scans. The host
//! ledger supplies the real implementation and the transaction boundary;
//! this crate supplies the contract and an in-memory backend.
//!
//! # Design Rules
//!
//! 1. The store never interprets values — it is a pure key-value store.
//! 2. Reads of absent keys return `Ok(None)`, never an error.
//! 3. Deleting an absent key is tolerated; callers requiring strict
//!    semantics pre-check existence.
//! 4. Range scans are snapshots in ascending lexicographic key order; the
//!    scan resource is released exactly once, on every exit path.
//! 5. All backend failures are propagated, never silently ignored.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StateError, StateResult};
pub use memory::MemoryState;
pub use traits::{KeyValue, RangeScan, WorldState};
