//! # Wire Frames and the Transaction Envelope
//!
//! The outer `TxRaw` frame carries the body and auth-info as opaque byte
//! buffers plus the signature list. Body and auth-info are decoded from
//! those buffers, which are also retained verbatim in the envelope for
//! sign-byte reconstruction.

use crate::domain::messages::Message;
use serde::{Deserialize, Serialize};
use shared_types::{Address, Coin, CoinError, Coins, Hash, PublicKey};

/// Type URL for Ed25519 public keys.
pub const ED25519_KEY_URL: &str = "/lg.crypto.ed25519.PubKey";
/// Type URL for compressed secp256k1 public keys.
pub const SECP256K1_KEY_URL: &str = "/lg.crypto.secp256k1.PubKey";

// =============================================================================
// WIRE FRAMES
// =============================================================================

/// The outer transaction frame as transmitted and stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxRaw {
    /// Encoded `TxBody`, retained verbatim for sign-byte reconstruction.
    pub body_bytes: Vec<u8>,
    /// Encoded `AuthInfo`, retained verbatim for sign-byte reconstruction.
    pub auth_info_bytes: Vec<u8>,
    /// Raw signatures, one per signer in signer order.
    pub signatures: Vec<Vec<u8>>,
}

/// The transaction body: messages and memo.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxBody {
    /// Type-tagged message payloads.
    pub messages: Vec<AnyMessage>,
    /// Free-form note, length-limited by the validation pipeline.
    pub memo: String,
}

/// Signer metadata and fee declaration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthInfo {
    /// Per-signer metadata, positionally aligned with the signer list.
    pub signer_infos: Vec<RawSignerInfo>,
    /// Declared fee.
    pub fee: Fee,
}

/// The declared fee of a transaction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fee {
    /// Fee amount; signed on the wire so negatives are rejectable.
    pub amount: Vec<Coin>,
    /// Declared gas limit for the whole evaluation.
    pub gas_limit: u64,
    /// Explicit fee payer. Absent means the first signer pays.
    pub payer: Option<Address>,
}

/// A type-tagged message payload awaiting registry dispatch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnyMessage {
    /// Registered type URL.
    pub type_url: String,
    /// Encoded message payload.
    pub value: Vec<u8>,
}

/// A type-tagged public key awaiting dispatch to the closed key enum.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnyPublicKey {
    /// Registered key type URL.
    pub type_url: String,
    /// Raw key bytes.
    pub key: Vec<u8>,
}

/// Wire-level per-signer record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSignerInfo {
    /// Declared public key.
    pub public_key: AnyPublicKey,
    /// Declared signing mode.
    pub mode_info: ModeInfo,
    /// The sequence number this signer signed against.
    pub sequence: u64,
}

/// Signing mode for a single key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignMode {
    /// No mode declared; always rejected.
    Unspecified,
    /// Sign document over the retained raw body/auth-info buffers.
    Direct,
    /// Human-readable textual signing; not implemented.
    Textual,
    /// Canonical JSON document signing.
    LegacyJson,
}

/// Mode descriptor: a single key's mode or a multi-signer threshold.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModeInfo {
    /// One key, one mode.
    Single(SignMode),
    /// Threshold multi-signature descriptor.
    Multi {
        /// Minimum number of sub-signatures.
        threshold: u32,
        /// Mode of each participating key.
        modes: Vec<ModeInfo>,
    },
}

/// Decoded per-signer metadata.
///
/// Positionally aligned with the resolved signer list: the i-th signer
/// corresponds to the i-th entry. The correspondence is preserved exactly as
/// declared - a declared key that does not derive the i-th signer's address
/// is surfaced by the validation pipeline, not silently corrected here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignerInfo {
    /// Declared public key.
    pub public_key: PublicKey,
    /// Declared signing mode.
    pub mode_info: ModeInfo,
    /// The sequence number this signer signed against.
    pub sequence: u64,
}

// =============================================================================
// ENVELOPE
// =============================================================================

/// A decoded transaction, immutable once constructed.
#[derive(Clone, Debug)]
pub struct TransactionEnvelope {
    messages: Vec<Message>,
    fee: Fee,
    memo: String,
    signer_infos: Vec<SignerInfo>,
    signers: Vec<Address>,
    signatures: Vec<Vec<u8>>,
    body_bytes: Vec<u8>,
    auth_info_bytes: Vec<u8>,
    encoded_len: usize,
    hash: Hash,
}

impl TransactionEnvelope {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        messages: Vec<Message>,
        fee: Fee,
        memo: String,
        signer_infos: Vec<SignerInfo>,
        signers: Vec<Address>,
        signatures: Vec<Vec<u8>>,
        body_bytes: Vec<u8>,
        auth_info_bytes: Vec<u8>,
        encoded_len: usize,
        hash: Hash,
    ) -> Self {
        Self {
            messages,
            fee,
            memo,
            signer_infos,
            signers,
            signatures,
            body_bytes,
            auth_info_bytes,
            encoded_len,
            hash,
        }
    }

    /// The decoded messages, in declared order.
    pub fn msgs(&self) -> &[Message] {
        &self.messages
    }

    /// The declared fee (wire form, amounts still signed).
    pub fn fee(&self) -> &Fee {
        &self.fee
    }

    /// The declared fee as a validated multiset. Fails on negative amounts.
    pub fn fee_coins(&self) -> Result<Coins, CoinError> {
        Coins::try_from_coins(&self.fee.amount)
    }

    /// The declared gas limit.
    pub fn gas_limit(&self) -> u64 {
        self.fee.gas_limit
    }

    /// The transaction memo.
    pub fn memo(&self) -> &str {
        &self.memo
    }

    /// Ordered, de-duplicated signer addresses derived from the messages.
    pub fn signers(&self) -> &[Address] {
        &self.signers
    }

    /// Per-signer metadata, positionally aligned with `signers()`.
    pub fn signer_infos(&self) -> &[SignerInfo] {
        &self.signer_infos
    }

    /// Raw signatures, one per signer in signer order.
    pub fn signatures(&self) -> &[Vec<u8>] {
        &self.signatures
    }

    /// The retained body buffer, byte-identical to what was signed over.
    pub fn body_bytes(&self) -> &[u8] {
        &self.body_bytes
    }

    /// The retained auth-info buffer, byte-identical to what was signed over.
    pub fn auth_info_bytes(&self) -> &[u8] {
        &self.auth_info_bytes
    }

    /// Length of the original encoded buffer, for size-proportional gas.
    pub fn encoded_len(&self) -> usize {
        self.encoded_len
    }

    /// SHA-256 of the original encoded buffer.
    pub fn hash(&self) -> Hash {
        self.hash
    }

    /// The account that pays the fee: the declared payer, or the first
    /// signer. `None` only for a transaction with no signers at all.
    pub fn fee_payer(&self) -> Option<Address> {
        self.fee.payer.or_else(|| self.signers.first().copied())
    }
}
