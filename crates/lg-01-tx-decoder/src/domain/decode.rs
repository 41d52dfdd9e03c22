//! # Transaction Decoding and Signer Resolution
//!
//! Double-decode of the outer frame: the raw `body_bytes` and
//! `auth_info_bytes` buffers are decoded into structured form *and* retained
//! verbatim. Determinism note: decoding the same buffer twice yields the
//! same envelope; nothing here depends on ambient state.

use crate::domain::entities::{
    AnyPublicKey, AuthInfo, SignerInfo, TransactionEnvelope, TxBody, TxRaw, ED25519_KEY_URL,
    SECP256K1_KEY_URL,
};
use crate::domain::errors::DecodeError;
use crate::domain::messages::{Message, MessageRegistry};
use shared_types::{sha256, Address, PublicKey};
use tracing::debug;

/// Decodes raw transaction buffers into envelopes.
pub struct TxDecoder {
    registry: MessageRegistry,
}

impl TxDecoder {
    /// A decoder over a custom message registry.
    pub fn new(registry: MessageRegistry) -> Self {
        Self { registry }
    }

    /// Decodes a raw buffer into an immutable envelope.
    ///
    /// # Errors
    /// - `Malformed`: the outer frame or a retained sub-buffer fails to parse
    /// - `UnregisteredMessageType`: a message type URL has no decoder
    /// - `UnregisteredKeyType`: a declared key type URL is unknown
    pub fn decode(&self, bytes: &[u8]) -> Result<TransactionEnvelope, DecodeError> {
        let raw: TxRaw = bincode::deserialize(bytes).map_err(|err| {
            debug!(len = bytes.len(), %err, "rejecting malformed outer frame");
            DecodeError::Malformed(format!("outer frame: {err}"))
        })?;

        let body: TxBody = bincode::deserialize(&raw.body_bytes)
            .map_err(|err| DecodeError::Malformed(format!("body: {err}")))?;
        let auth_info: AuthInfo = bincode::deserialize(&raw.auth_info_bytes)
            .map_err(|err| DecodeError::Malformed(format!("auth info: {err}")))?;

        let messages = body
            .messages
            .iter()
            .map(|any| self.registry.decode(any))
            .collect::<Result<Vec<_>, _>>()?;

        let signer_infos = auth_info
            .signer_infos
            .iter()
            .map(|info| {
                Ok(SignerInfo {
                    public_key: decode_public_key(&info.public_key)?,
                    mode_info: info.mode_info.clone(),
                    sequence: info.sequence,
                })
            })
            .collect::<Result<Vec<_>, DecodeError>>()?;

        let signers = resolve_signers(&messages);

        Ok(TransactionEnvelope::new(
            messages,
            auth_info.fee,
            body.memo,
            signer_infos,
            signers,
            raw.signatures,
            raw.body_bytes,
            raw.auth_info_bytes,
            bytes.len(),
            sha256(bytes),
        ))
    }
}

impl Default for TxDecoder {
    fn default() -> Self {
        Self::new(MessageRegistry::default())
    }
}

/// Derives the required signer list from decoded messages: every message's
/// signers, in message order, first occurrence wins. Pure function.
pub fn resolve_signers(messages: &[Message]) -> Vec<Address> {
    let mut signers = Vec::new();
    for message in messages {
        for address in message.signers() {
            if !signers.contains(&address) {
                signers.push(address);
            }
        }
    }
    signers
}

fn decode_public_key(any: &AnyPublicKey) -> Result<PublicKey, DecodeError> {
    match any.type_url.as_str() {
        ED25519_KEY_URL => {
            let bytes: [u8; 32] = any
                .key
                .as_slice()
                .try_into()
                .map_err(|_| DecodeError::Malformed(format!("ed25519 key of {} bytes", any.key.len())))?;
            Ok(PublicKey::Ed25519(bytes))
        }
        SECP256K1_KEY_URL => {
            let bytes: [u8; 33] = any
                .key
                .as_slice()
                .try_into()
                .map_err(|_| {
                    DecodeError::Malformed(format!("secp256k1 key of {} bytes", any.key.len()))
                })?;
            Ok(PublicKey::Secp256k1(bytes))
        }
        other => Err(DecodeError::UnregisteredKeyType(other.to_string())),
    }
}
