//! Decode error types.

use thiserror::Error;

/// Errors from decoding a raw transaction buffer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The buffer (or a retained sub-buffer) is not a valid encoding.
    #[error("Malformed transaction encoding: {0}")]
    Malformed(String),

    /// A message carried a type URL with no registered decoder.
    #[error("Unregistered message type: {0}")]
    UnregisteredMessageType(String),

    /// A declared public key carried an unknown type URL.
    #[error("Unregistered public key type: {0}")]
    UnregisteredKeyType(String),
}
