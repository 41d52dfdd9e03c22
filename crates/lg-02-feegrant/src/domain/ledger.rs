//! # Allowance Ledger
//!
//! Implements `FeeAllowanceApi` over an `AllowanceStore`. Spends work on a
//! copy of the stored record and persist only on success, which is what
//! makes `use_allowance` all-or-nothing.

use crate::domain::entities::{FeeAllowance, Grant, SpendOutcome};
use crate::domain::errors::FeegrantError;
use crate::ports::inbound::FeeAllowanceApi;
use crate::ports::outbound::AllowanceStore;
use shared_types::{hex_addr, Address, Coins, Timestamp};
use tracing::{debug, info};

/// The fee allowance ledger.
pub struct AllowanceLedger<S: AllowanceStore> {
    store: S,
}

impl<S: AllowanceStore> AllowanceLedger<S> {
    /// Creates a ledger over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: AllowanceStore> FeeAllowanceApi for AllowanceLedger<S> {
    fn grant(
        &mut self,
        granter: Address,
        grantee: Address,
        allowance: FeeAllowance,
        now: Timestamp,
    ) -> Result<(), FeegrantError> {
        allowance.validate(now)?;
        if self.store.get(&granter, &grantee).is_some() {
            debug!(
                granter = %hex_addr(&granter),
                grantee = %hex_addr(&grantee),
                "replacing existing fee allowance"
            );
        }
        self.store.set(Grant {
            granter,
            grantee,
            allowance,
        });
        info!(
            granter = %hex_addr(&granter),
            grantee = %hex_addr(&grantee),
            "fee allowance granted"
        );
        Ok(())
    }

    fn revoke(&mut self, granter: &Address, grantee: &Address) -> Result<FeeAllowance, FeegrantError> {
        let grant = self
            .store
            .remove(granter, grantee)
            .ok_or(FeegrantError::NoAllowance {
                granter: *granter,
                grantee: *grantee,
            })?;
        info!(
            granter = %hex_addr(granter),
            grantee = %hex_addr(grantee),
            "fee allowance revoked"
        );
        Ok(grant.allowance)
    }

    fn get(&mut self, granter: &Address, grantee: &Address, now: Timestamp) -> Option<FeeAllowance> {
        let grant = self.store.get(granter, grantee)?;
        if grant.allowance.is_expired(now) {
            // Expired records are indistinguishable from absent ones; prune
            // at read time so they never resurface.
            self.store.remove(granter, grantee);
            debug!(
                granter = %hex_addr(granter),
                grantee = %hex_addr(grantee),
                "pruned expired fee allowance"
            );
            return None;
        }
        Some(grant.allowance)
    }

    fn use_allowance(
        &mut self,
        granter: &Address,
        grantee: &Address,
        fee: &Coins,
        now: Timestamp,
        msg_type_urls: &[&str],
    ) -> Result<(), FeegrantError> {
        let mut grant = self
            .store
            .get(granter, grantee)
            .ok_or(FeegrantError::NoAllowance {
                granter: *granter,
                grantee: *grantee,
            })?;

        if grant.allowance.is_expired(now) {
            self.store.remove(granter, grantee);
            return Err(FeegrantError::AllowanceExpired {
                expired_at: grant.allowance.expiration().unwrap_or(now),
                now,
            });
        }

        // Spend against the working copy; the store is only touched once the
        // spend has succeeded.
        match grant.allowance.try_spend(fee, now, msg_type_urls)? {
            SpendOutcome::Exhausted => {
                self.store.remove(granter, grantee);
                info!(
                    granter = %hex_addr(granter),
                    grantee = %hex_addr(grantee),
                    fee = %fee,
                    "fee allowance used and exhausted"
                );
            }
            SpendOutcome::Spent => {
                self.store.set(grant);
                debug!(
                    granter = %hex_addr(granter),
                    grantee = %hex_addr(grantee),
                    fee = %fee,
                    "fee allowance used"
                );
            }
        }
        Ok(())
    }
}
