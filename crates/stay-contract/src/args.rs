//! Strict parsers for arguments crossing the invocation boundary as text.
//!
//! A malformed argument is a [`ContractError::Validation`], distinct from
//! any storage failure: validation happens before the world state is
//! touched.

use crate::error::{ContractError, ContractResult};

/// Parse a boolean argument. Only the literal tokens `"true"` and
/// `"false"` are accepted, case-sensitively.
pub fn parse_bool(field: &str, token: &str) -> ContractResult<bool> {
    match token {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ContractError::Validation(format!(
            "{field} must be \"true\" or \"false\", got {token:?}"
        ))),
    }
}

/// Parse a decimal numeric argument.
pub fn parse_f32(field: &str, token: &str) -> ContractResult<f32> {
    token.parse().map_err(|_| {
        ContractError::Validation(format!("{field} must be a decimal number, got {token:?}"))
    })
}
