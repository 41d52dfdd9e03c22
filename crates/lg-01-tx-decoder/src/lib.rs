//! # Transaction Decoder Subsystem (LG-01)
//!
//! Turns a raw transaction byte buffer into a structured, immutable
//! envelope and derives the ordered signer list from its messages.
//!
//! ## Contract
//!
//! Decoding retains the exact original `body_bytes` and `auth_info_bytes`
//! sub-buffers. Those buffers feed signature verification downstream, and
//! re-serializing them could produce bytes that differ from what was
//! actually signed - so they are carried verbatim, never re-encoded.
//!
//! ## Failure Conditions
//!
//! - Malformed encoding at any layer
//! - A message whose type URL is not registered
//! - A declared public key whose type URL is not registered

pub mod domain;

pub use domain::decode::{resolve_signers, TxDecoder};
pub use domain::entities::{
    AnyMessage, AnyPublicKey, AuthInfo, Fee, ModeInfo, RawSignerInfo, SignMode, SignerInfo,
    TransactionEnvelope, TxBody, TxRaw, ED25519_KEY_URL, SECP256K1_KEY_URL,
};
pub use domain::errors::DecodeError;
pub use domain::messages::{
    Message, MessageRegistry, MsgGrantAllowance, MsgRevokeAllowance, MsgTransfer,
    GRANT_ALLOWANCE_URL, REVOKE_ALLOWANCE_URL, TRANSFER_URL,
};
