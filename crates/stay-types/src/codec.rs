//! The [`StateEntity`] trait: the storage contract every top-level entity
//! satisfies.
//!
//! An entity is stored under its own `id` — no prefixing, namespacing, or
//! composite keys. Nested records (service levels, agreements) have no
//! independent key; they live only inside their parent's encoded value.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::CodecError;

/// A top-level entity addressable in the world state.
///
/// Implementations must guarantee a round-trip-safe canonical encoding:
/// `from_state_bytes(to_state_bytes(x)) == x` for every reachable value.
/// Field names in the encoding are fixed per entity type and must never
/// change — existing ledger records depend on them.
pub trait StateEntity: Serialize + DeserializeOwned + Clone {
    /// Entity kind used in log and error messages (e.g. "hotel").
    const TYPE_NAME: &'static str;

    /// The world-state key this entity is stored under: its `id` field.
    fn key(&self) -> &str;

    /// Encode to the canonical byte form.
    fn to_state_bytes(&self) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec(self).map_err(|e| CodecError::Encode(e.to_string()))
    }

    /// Decode from the canonical byte form.
    ///
    /// Malformed bytes produce [`CodecError::Decode`], never a silent
    /// default or a not-found signal.
    fn from_state_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        serde_json::from_slice(bytes).map_err(|e| CodecError::Decode(e.to_string()))
    }
}
