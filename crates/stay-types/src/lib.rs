//! Foundation types for StayLedger.
//!
//! This crate provides the domain entities managed by the StayLedger
//! contracts and the canonical codec that maps each entity to and from its
//! world-state byte encoding. Every other StayLedger crate depends on
//! `stay-types`.
//!
//! # Entity Variants
//!
//! Two structurally parallel entity families share the same storage
//! contract:
//!
//! - [`hotel::Hotel`] — the flat hotel-quality record
//! - [`sla::Hotel`] — the nested record embedding [`sla::ServiceLevel`]
//!   and [`sla::Agreement`] sequences
//!
//! # Codec
//!
//! [`StateEntity`] defines the storage contract: a unique top-level key and
//! a canonical JSON encoding with fixed field names. The encoding is
//! round-trip safe: `from_state_bytes(to_state_bytes(x)) == x` for every
//! reachable value, including deeply nested collections.

pub mod codec;
pub mod error;
pub mod hotel;
pub mod sla;

pub use codec::StateEntity;
pub use error::CodecError;
