//! Client-side session layer for StayLedger.
//!
//! Everything in this crate is thin glue around the contract core: a
//! credential [`Wallet`] holding the identity that signs invocations, a
//! [`ConnectionProfile`] describing the channel, and the
//! [`Gateway`] → [`Network`] → [`Contract`] handle chain through which a
//! caller submits or evaluates named invocations.
//!
//! Consensus, ordering, endorsement, and real network transport are out of
//! scope: the gateway executes each invocation as one transaction over the
//! channel's in-process world state. The handle surface is shaped so a
//! transport-backed implementation could slot in without touching callers.

pub mod config;
pub mod error;
pub mod gateway;
pub mod wallet;

pub use config::{ConnectionProfile, ContractVariant, PeerConfig};
pub use error::{GatewayError, GatewayResult};
pub use gateway::{Contract, Gateway, Network};
pub use wallet::{FileSystemWallet, Identity, InMemoryWallet, Wallet};
