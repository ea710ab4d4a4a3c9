use thiserror::Error;

/// Errors from the client-side session layer.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The requested identity label is not present in the wallet.
    #[error("identity {0:?} not found in wallet")]
    IdentityNotFound(String),

    /// The connection profile could not be read or parsed.
    #[error("connection profile error: {0}")]
    Profile(String),

    /// The requested channel is not the one this profile describes.
    #[error("unknown channel {0:?}")]
    UnknownChannel(String),

    /// The requested contract name is not declared in the profile.
    #[error("unknown contract {0:?}")]
    UnknownContract(String),

    /// A stored identity could not be encoded or decoded.
    #[error("identity encoding error: {0}")]
    Identity(String),

    /// An invocation failed; carries the contract's message verbatim.
    #[error("invocation failed: {0}")]
    Invocation(String),

    /// Wallet or profile I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;
