//! # Core Domain Entities
//!
//! Shared primitives for the transaction authorization pipeline.
//!
//! ## Clusters
//!
//! - **Identity**: `Address`, `PublicKey`, `Account`
//! - **Time**: `Timestamp`
//! - **Observability**: `Event`

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};
use sha2::{Digest as Sha2Digest, Sha256};
use sha3::{Digest, Keccak256};

/// A 32-byte hash (SHA-256 or Keccak-256 depending on context).
pub type Hash = [u8; 32];

/// A 20-byte account address (last 20 bytes of the Keccak256 of the public key).
pub type Address = [u8; 20];

/// Unix timestamp in seconds.
pub type Timestamp = u64;

// =============================================================================
// HASHING
// =============================================================================

/// Keccak256 hash of arbitrary bytes.
pub fn keccak256(data: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    hash
}

/// SHA-256 hash of arbitrary bytes.
pub fn sha256(data: &[u8]) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Lowercase hex rendering of an address, for logs, events, and JSON forms.
pub fn hex_addr(address: &Address) -> String {
    hex::encode(address)
}

// =============================================================================
// IDENTITY
// =============================================================================

/// Declared public key of a transaction signer.
///
/// Closed set: adding a key algorithm is a protocol change, so an unknown key
/// type must fail decoding rather than fall through to a default.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PublicKey {
    /// Ed25519 public key (32 bytes).
    Ed25519(#[serde_as(as = "Bytes")] [u8; 32]),
    /// Compressed secp256k1 public key (33 bytes, SEC1).
    Secp256k1(#[serde_as(as = "Bytes")] [u8; 33]),
}

impl PublicKey {
    /// Derives the account address: last 20 bytes of Keccak256 of the raw key.
    pub fn address(&self) -> Address {
        let hash = keccak256(self.as_bytes());
        let mut address = [0u8; 20];
        address.copy_from_slice(&hash[12..]);
        address
    }

    /// The raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Ed25519(bytes) => bytes,
            Self::Secp256k1(bytes) => bytes,
        }
    }
}

/// The authorization-relevant state of an account.
///
/// The public key is optional: accounts created by an incoming transfer (or
/// by a fee grant paying for a brand-new account) have no key until their
/// first signed transaction records one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// The account's address.
    pub address: Address,
    /// Public key, set on first signed transaction.
    pub public_key: Option<PublicKey>,
    /// Stable account identifier, assigned at creation and never reused.
    pub account_number: u64,
    /// Replay-protection counter. Increments by exactly 1 per accepted
    /// transaction.
    pub sequence: u64,
}

impl Account {
    /// Creates a fresh account with no key and sequence zero.
    pub fn new(address: Address, account_number: u64) -> Self {
        Self {
            address,
            public_key: None,
            account_number,
            sequence: 0,
        }
    }
}

// =============================================================================
// OBSERVABILITY
// =============================================================================

/// An event emitted during transaction processing.
///
/// Events accumulate on the per-evaluation context and are handed back to the
/// caller with the accept/reject decision.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Event kind, e.g. `"tx_fee"` or `"use_fee_grant"`.
    pub kind: String,
    /// Key/value attribute pairs.
    pub attributes: Vec<(String, String)>,
}

impl Event {
    /// Creates an event with no attributes.
    pub fn new(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            attributes: Vec::new(),
        }
    }

    /// Appends an attribute, builder style.
    pub fn attr(mut self, key: &str, value: impl Into<String>) -> Self {
        self.attributes.push((key.to_string(), value.into()));
        self
    }
}
