//! # Ante Errors
//!
//! Every stage failure is terminal for the evaluation and is reported
//! immediately; nothing here is retried or recovered. "Unsupported"
//! conditions (textual mode, multisig sign bytes) are kept distinct from
//! "invalid" conditions so callers can tell not-yet-implemented apart from
//! malformed or malicious.

use lg_02_feegrant::FeegrantError;
use shared_types::{Address, CoinError, Coins};
use thiserror::Error;

/// Errors from the ante validation pipeline.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnteError {
    /// Declared gas limit exceeds the configured maximum.
    #[error("Invalid gas limit: {wanted} > {max}")]
    InvalidGasLimit { wanted: u64, max: u64 },

    /// The declared fee contains a negative amount.
    #[error("Negative fee amount {amount} for denom {denom}")]
    NegativeFee { denom: String, amount: i128 },

    /// The transaction carries no signatures at all.
    #[error("No signatures supplied")]
    NoSignatures,

    /// Signature count does not match the required signer count.
    #[error("Wrong number of signatures: expected {expected}, got {got}")]
    SignatureCountMismatch { expected: usize, got: usize },

    /// Memo exceeds the configured length limit.
    #[error("Memo length {length} exceeds limit {max}")]
    MemoTooLarge { length: usize, max: usize },

    /// More signers than the configured maximum.
    #[error("Too many signatures: {count} > {max}")]
    TooManySignatures { count: usize, max: usize },

    /// Fee below the configured mempool floor.
    #[error("Insufficient fee: required {required}, provided {provided}")]
    InsufficientFee { required: Coins, provided: Coins },

    /// Payer balance cannot cover the fee.
    #[error("Insufficient funds: required {required}{denom}, available {available}{denom}")]
    InsufficientFunds {
        denom: String,
        required: u128,
        available: u128,
    },

    /// An account required by this stage does not exist.
    #[error("Account not found: {0:?}")]
    AccountNotFound(Address),

    /// No usable fee allowance for the (granter, grantee) pair. Covers both
    /// absence and expiry: an expired allowance is treated as absent.
    #[error("No fee allowance: granter {granter:?}, grantee {grantee:?}")]
    NoAllowance { granter: Address, grantee: Address },

    /// The fee exceeds the allowance's remaining spend limit.
    #[error("Fee allowance exceeded: requested {requested}{denom}, remaining {remaining}{denom}")]
    AllowanceExceeded {
        denom: String,
        requested: u128,
        remaining: u128,
    },

    /// A message type outside the allowance's allowed set.
    #[error("Message type not covered by allowance: {0}")]
    MessageNotAllowed(String),

    /// The declared public key does not derive the signer's address.
    #[error("Public key does not match signer: signer {signer:?}, derived {derived:?}")]
    InvalidPublicKey { signer: Address, derived: Address },

    /// The account has no public key recorded to verify against.
    #[error("No public key on account {0:?}")]
    PubKeyNotSet(Address),

    /// A signature failed verification against the reconstructed sign bytes.
    #[error("Signature verification failed for signer {signer:?}")]
    SignatureVerificationFailed { signer: Address },

    /// Declared sequence does not match the account's stored sequence.
    #[error("Wrong sequence: expected {expected}, got {got}")]
    WrongSequence { expected: u64, got: u64 },

    /// A declared sign mode this pipeline does not implement. Not invalid,
    /// not malicious - just unsupported.
    #[error("Unsupported sign mode: {0}")]
    UnsupportedSignMode(&'static str),

    /// The signer declared no concrete sign mode.
    #[error("Sign mode is unspecified")]
    UnspecifiedSignMode,

    /// Threshold multi-signature sign bytes must be handled by the caller.
    #[error("Multisig mode is not supported by sign-byte generation")]
    MultisigNotSupported,

    /// The gas meter hit the declared limit.
    #[error("Out of gas in {descriptor}: limit {limit}")]
    OutOfGas { descriptor: &'static str, limit: u64 },

    /// Invariant breakage: a missing expected entry or failed internal
    /// encoding. Never caused by user input alone.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<CoinError> for AnteError {
    fn from(err: CoinError) -> Self {
        match err {
            CoinError::NegativeAmount { denom, amount } => Self::NegativeFee { denom, amount },
            CoinError::Insufficient {
                denom,
                required,
                available,
            } => Self::InsufficientFunds {
                denom,
                required,
                available,
            },
            CoinError::Overflow { denom } => Self::Internal(format!("amount overflow for {denom}")),
        }
    }
}

impl AnteError {
    /// Maps a ledger failure into the pipeline taxonomy. Absence and expiry
    /// collapse into `NoAllowance` here: past its expiration an allowance
    /// must be indistinguishable from one that never existed.
    pub fn from_feegrant(err: FeegrantError, granter: Address, grantee: Address) -> Self {
        match err {
            FeegrantError::NoAllowance { .. } | FeegrantError::AllowanceExpired { .. } => {
                Self::NoAllowance { granter, grantee }
            }
            FeegrantError::AllowanceExceeded {
                denom,
                requested,
                remaining,
            } => Self::AllowanceExceeded {
                denom,
                requested,
                remaining,
            },
            FeegrantError::MessageNotAllowed(url) => Self::MessageNotAllowed(url),
            FeegrantError::InvalidAllowance(reason) => Self::Internal(reason),
        }
    }
}
