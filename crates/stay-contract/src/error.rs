use stay_state::StateError;
use stay_types::CodecError;
use thiserror::Error;

/// Errors produced by contract operations.
///
/// Every error is surfaced immediately to the invocation boundary; the
/// contract performs no local recovery or retry. Retrying transient
/// storage failures is the calling session layer's concern.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ContractError {
    /// The operation targets an id absent from the world state.
    #[error("the {entity} {id} does not exist")]
    NotFound { entity: &'static str, id: String },

    /// A create targets an id already present.
    #[error("the {entity} {id} already exists")]
    AlreadyExists { entity: &'static str, id: String },

    /// An argument could not be parsed into its expected scalar type.
    #[error("invalid argument: {0}")]
    Validation(String),

    /// Stored bytes do not conform to the expected entity shape.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// The underlying world-state call itself failed.
    #[error(transparent)]
    Storage(#[from] StateError),
}

/// Result alias for contract operations.
pub type ContractResult<T> = Result<T, ContractError>;
