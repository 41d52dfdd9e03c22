//! # Allowance Variants
//!
//! `FeeAllowance` is a closed tagged union. Callers never inspect the
//! concrete variant: the whole contract is `try_spend(fee, now, msgs)`.
//! The ledger spends against a working copy and only persists it on
//! success, so a failed spend leaves the stored record untouched.

use crate::domain::errors::FeegrantError;
use serde::{Deserialize, Serialize};
use shared_types::{Address, CoinError, Coins, Timestamp};

/// Result of a successful spend against an allowance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpendOutcome {
    /// The allowance still has remaining limit and must be written back.
    Spent,
    /// The spend drained the limit to exactly zero; the record must be
    /// deleted.
    Exhausted,
}

/// A standing permission with a flat spend limit and optional expiration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicAllowance {
    /// Total remaining spend limit. `None` means unlimited.
    pub spend_limit: Option<Coins>,
    /// Absolute expiration time. `None` means no expiry.
    pub expiration: Option<Timestamp>,
}

impl BasicAllowance {
    fn try_spend(&mut self, fee: &Coins) -> Result<SpendOutcome, FeegrantError> {
        match &self.spend_limit {
            None => Ok(SpendOutcome::Spent),
            Some(limit) => {
                let remaining = limit.checked_sub(fee).map_err(map_exceeded)?;
                let outcome = if remaining.is_zero() {
                    SpendOutcome::Exhausted
                } else {
                    SpendOutcome::Spent
                };
                self.spend_limit = Some(remaining);
                Ok(outcome)
            }
        }
    }
}

/// An allowance whose spendable amount refills every fixed period, bounded
/// by an overall basic limit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodicAllowance {
    /// Overall limit and expiration.
    pub basic: BasicAllowance,
    /// Refill period in seconds.
    pub period: u64,
    /// Amount made spendable at each period boundary.
    pub period_spend_limit: Coins,
    /// Amount still spendable in the current period.
    pub period_can_spend: Coins,
    /// Time at which the current period lapses.
    pub period_reset: Timestamp,
}

impl PeriodicAllowance {
    /// Refills the period budget when the reset mark has passed, then spends
    /// against both the period budget and the overall limit.
    fn try_spend(&mut self, fee: &Coins, now: Timestamp) -> Result<SpendOutcome, FeegrantError> {
        if now >= self.period_reset {
            self.period_can_spend = match &self.basic.spend_limit {
                Some(limit) => self.period_spend_limit.min(limit),
                None => self.period_spend_limit.clone(),
            };
            // Catch-up rule: the fresh period starts at mark+period, or at
            // now+period if even that is already behind.
            self.period_reset += self.period;
            if now >= self.period_reset {
                self.period_reset = now + self.period;
            }
        }
        self.period_can_spend = self.period_can_spend.checked_sub(fee).map_err(map_exceeded)?;
        self.basic.try_spend(fee)
    }
}

/// Wraps another allowance and restricts it to a set of message types.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowedMsgAllowance {
    /// The wrapped allowance.
    pub allowance: Box<FeeAllowance>,
    /// Message type URLs the grantee's transactions may contain.
    pub allowed_messages: Vec<String>,
}

/// A fee allowance: the polymorphic extension point of the grant ledger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeeAllowance {
    /// Flat limit with optional expiration.
    Basic(BasicAllowance),
    /// Periodically refilling limit.
    Periodic(PeriodicAllowance),
    /// Message-type-filtered wrapper.
    AllowedMsg(AllowedMsgAllowance),
}

impl FeeAllowance {
    /// The allowance's expiration, if any. For wrappers, the inner one's.
    pub fn expiration(&self) -> Option<Timestamp> {
        match self {
            Self::Basic(basic) => basic.expiration,
            Self::Periodic(periodic) => periodic.basic.expiration,
            Self::AllowedMsg(filtered) => filtered.allowance.expiration(),
        }
    }

    /// True if the allowance has an expiration at or before `now`.
    pub fn is_expired(&self, now: Timestamp) -> bool {
        matches!(self.expiration(), Some(at) if at <= now)
    }

    /// Grant-time validation: an allowance that can never be used is a
    /// caller bug and must be rejected up front.
    pub fn validate(&self, now: Timestamp) -> Result<(), FeegrantError> {
        if self.is_expired(now) {
            return Err(FeegrantError::InvalidAllowance(
                "expiration is in the past".to_string(),
            ));
        }
        match self {
            Self::Basic(basic) => {
                if matches!(&basic.spend_limit, Some(limit) if limit.is_zero()) {
                    return Err(FeegrantError::InvalidAllowance(
                        "spend limit is zero".to_string(),
                    ));
                }
            }
            Self::Periodic(periodic) => {
                if matches!(&periodic.basic.spend_limit, Some(limit) if limit.is_zero()) {
                    return Err(FeegrantError::InvalidAllowance(
                        "spend limit is zero".to_string(),
                    ));
                }
                if periodic.period == 0 {
                    return Err(FeegrantError::InvalidAllowance("period is zero".to_string()));
                }
                if periodic.period_spend_limit.is_zero() {
                    return Err(FeegrantError::InvalidAllowance(
                        "period spend limit is zero".to_string(),
                    ));
                }
            }
            Self::AllowedMsg(filtered) => {
                if filtered.allowed_messages.is_empty() {
                    return Err(FeegrantError::InvalidAllowance(
                        "allowed message set is empty".to_string(),
                    ));
                }
                filtered.allowance.validate(now)?;
            }
        }
        Ok(())
    }

    /// Attempts to spend `fee` against this allowance at time `now`, for a
    /// transaction containing `msg_type_urls`.
    ///
    /// On success the allowance has been mutated in place and the outcome
    /// says whether the record should be kept or deleted. On failure the
    /// caller must discard the mutated value; the stored record stays as it
    /// was (all-or-nothing).
    pub fn try_spend(
        &mut self,
        fee: &Coins,
        now: Timestamp,
        msg_type_urls: &[&str],
    ) -> Result<SpendOutcome, FeegrantError> {
        match self {
            Self::Basic(basic) => basic.try_spend(fee),
            Self::Periodic(periodic) => periodic.try_spend(fee, now),
            Self::AllowedMsg(filtered) => {
                for url in msg_type_urls {
                    if !filtered.allowed_messages.iter().any(|allowed| allowed == url) {
                        return Err(FeegrantError::MessageNotAllowed((*url).to_string()));
                    }
                }
                filtered.allowance.try_spend(fee, now, msg_type_urls)
            }
        }
    }
}

/// The persisted allowance record: one per (granter, grantee) pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grant {
    /// The account whose balance stands behind the fees.
    pub granter: Address,
    /// The account whose transactions may draw on it.
    pub grantee: Address,
    /// The allowance payload.
    pub allowance: FeeAllowance,
}

fn map_exceeded(err: CoinError) -> FeegrantError {
    match err {
        CoinError::Insufficient {
            denom,
            required,
            available,
        } => FeegrantError::AllowanceExceeded {
            denom,
            requested: required,
            remaining: available,
        },
        other => FeegrantError::InvalidAllowance(other.to_string()),
    }
}
