//! # Inbound Port - FeeAllowanceApi
//!
//! Primary driving port for the fee allowance ledger. The fee deduction
//! stage of the validation pipeline is the main consumer; governance-style
//! message handlers call `grant`/`revoke`.

use crate::domain::entities::FeeAllowance;
use crate::domain::errors::FeegrantError;
use shared_types::{Address, Coins, Timestamp};

/// Primary API for the fee allowance ledger.
///
/// All methods take `now` explicitly: expiry is judged against the block
/// time of the evaluation, never against wall-clock time.
pub trait FeeAllowanceApi: Send + Sync {
    /// Grants `allowance` from `granter` to `grantee`, replacing any prior
    /// allowance for the pair.
    ///
    /// # Errors
    /// - `InvalidAllowance`: the allowance could never be used (zero limit,
    ///   expiration already passed, empty message filter)
    fn grant(
        &mut self,
        granter: Address,
        grantee: Address,
        allowance: FeeAllowance,
        now: Timestamp,
    ) -> Result<(), FeegrantError>;

    /// Revokes the allowance for the pair, returning it.
    ///
    /// # Errors
    /// - `NoAllowance`: nothing to revoke
    fn revoke(&mut self, granter: &Address, grantee: &Address) -> Result<FeeAllowance, FeegrantError>;

    /// Looks up the allowance for the pair. An allowance past its
    /// expiration is pruned on the spot and reported as absent.
    fn get(&mut self, granter: &Address, grantee: &Address, now: Timestamp) -> Option<FeeAllowance>;

    /// Atomically spends `fee` against the pair's allowance.
    ///
    /// All-or-nothing: on any failure the stored allowance is unchanged
    /// (an expired record is the one exception - it is pruned). A spend
    /// that drains the limit to exactly zero deletes the record.
    ///
    /// # Errors
    /// - `NoAllowance`: no allowance exists for the pair
    /// - `AllowanceExpired`: the allowance's expiration has passed
    /// - `AllowanceExceeded`: `fee` exceeds the remaining limit
    /// - `MessageNotAllowed`: a message type outside the allowed set
    fn use_allowance(
        &mut self,
        granter: &Address,
        grantee: &Address,
        fee: &Coins,
        now: Timestamp,
        msg_type_urls: &[&str],
    ) -> Result<(), FeegrantError>;
}
