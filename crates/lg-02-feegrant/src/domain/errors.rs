//! # Fee Allowance Errors
//!
//! Absence, expiry, and exhaustion are deliberately distinct conditions:
//! callers must be able to tell "there is no standing grant" apart from
//! "the grant exists but cannot cover this fee".

use shared_types::{Address, Timestamp};
use thiserror::Error;

/// Errors from fee allowance operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FeegrantError {
    /// No allowance exists for this (granter, grantee) pair.
    #[error("No fee allowance: granter {granter:?}, grantee {grantee:?}")]
    NoAllowance { granter: Address, grantee: Address },

    /// The allowance existed but its expiration has passed. Surfaced to the
    /// validation pipeline the same way as `NoAllowance`; kept distinct here
    /// for auditability.
    #[error("Fee allowance expired at {expired_at} (now {now})")]
    AllowanceExpired { expired_at: Timestamp, now: Timestamp },

    /// The requested fee exceeds the remaining spend limit.
    #[error("Fee allowance exceeded: requested {requested}{denom}, remaining {remaining}{denom}")]
    AllowanceExceeded {
        denom: String,
        requested: u128,
        remaining: u128,
    },

    /// A message type outside the allowance's allowed set.
    #[error("Message type not covered by allowance: {0}")]
    MessageNotAllowed(String),

    /// The allowance is unusable as granted (empty limit, already expired).
    #[error("Invalid allowance: {0}")]
    InvalidAllowance(String),
}
