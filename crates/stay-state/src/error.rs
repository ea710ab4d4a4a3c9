use thiserror::Error;

/// Errors from world-state operations.
///
/// These are host-side failures (transport, commit, lock state) — a missing
/// key is not an error at this layer, it is `Ok(None)`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StateError {
    /// The underlying store call itself failed.
    #[error("world state backend failure: {0}")]
    Backend(String),
}

/// Result alias for world-state operations.
pub type StateResult<T> = Result<T, StateError>;
