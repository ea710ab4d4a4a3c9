//! Contract operations for StayLedger.
//!
//! This crate holds the externally invocable API: create, read, update,
//! delete, existence-check, full enumeration, and bulk seeding of hotel
//! records, in two structurally parallel variants:
//!
//! - [`HotelContract`] over the flat [`stay_types::hotel::Hotel`]
//! - [`SlaContract`] over the nested [`stay_types::sla::Hotel`]
//!
//! Both variants delegate to one generic CRUD/enumeration pattern in
//! [`ops`], parameterized over [`stay_types::StateEntity`], so the two
//! surfaces cannot drift apart.
//!
//! The contract type itself is stateless. All state lives in the world
//! state reached through a per-invocation [`TransactionContext`]; commit
//! and conflict detection belong to the host ledger's transaction layer.
//! The contract's only obligation there is to read before it writes, so
//! racing invocations are detectable by the host's read/write-set
//! validation.

pub mod args;
pub mod context;
pub mod error;
pub mod hotel;
pub mod invoke;
pub mod ops;
pub mod sla;

pub use context::TransactionContext;
pub use error::{ContractError, ContractResult};
pub use hotel::HotelContract;
pub use sla::SlaContract;
