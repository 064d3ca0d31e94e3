//! Error types for codec and bridge operations.

use thiserror::Error;

use crate::bridge::ValueKind;

/// Everything that can go wrong in a single `encode`/`decode` call.
///
/// The taxonomy is flat on purpose: hosts only ever see the rendered message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The host called the entry point with no arguments.
    #[error("Input must be a string: no argument given")]
    MissingArgument,

    /// The host passed more than one argument.
    #[error("Input must be a string: expected exactly one argument, got {0}")]
    ArgumentCount(usize),

    /// The single argument was not a string.
    #[error("Input must be a string, got {found}")]
    NotAString { found: ValueKind },

    /// The input was not valid standard Base64 (decoding path).
    #[error("Error decoding Base64: {0}")]
    Malformed(#[from] base64::DecodeError),
}

/// Convenience alias used throughout b64-core.
pub type Result<T> = std::result::Result<T, CodecError>;
