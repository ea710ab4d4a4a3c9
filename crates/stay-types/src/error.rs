use thiserror::Error;

/// Errors produced by the entity codec.
///
/// A decode failure is a distinct condition from "not found": it means the
/// key was present but the stored bytes do not conform to the entity shape.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("failed to encode entity: {0}")]
    Encode(String),

    #[error("malformed entity encoding: {0}")]
    Decode(String),
}
