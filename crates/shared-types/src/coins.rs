//! # Coin Multisets
//!
//! Fee and spend-limit amounts as `denom -> amount` multisets with checked
//! arithmetic.
//!
//! Wire-level `Coin` amounts are signed so that a maliciously negative fee is
//! representable and can be rejected with a precise error. Validated `Coins`
//! hold unsigned amounts; once constructed they can never go negative.

use crate::errors::CoinError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single denominated amount as it appears on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    /// Denomination, e.g. `"atom"`.
    pub denom: String,
    /// Signed on the wire; validation rejects negatives.
    pub amount: i128,
}

impl Coin {
    /// Creates a wire coin.
    pub fn new(denom: &str, amount: i128) -> Self {
        Self {
            denom: denom.to_string(),
            amount,
        }
    }
}

/// A validated multiset of `denom -> amount`.
///
/// Invariants: amounts are strictly positive, denoms are unique and sorted
/// (`BTreeMap` keys). The empty multiset is the zero value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coins(BTreeMap<String, u128>);

impl Coins {
    /// The empty (zero) multiset.
    pub fn new() -> Self {
        Self::default()
    }

    /// A multiset holding a single denomination.
    ///
    /// A zero amount yields the empty multiset.
    pub fn single(denom: &str, amount: u128) -> Self {
        let mut coins = Self::new();
        if amount > 0 {
            coins.0.insert(denom.to_string(), amount);
        }
        coins
    }

    /// Validates wire coins into a multiset: rejects negative amounts,
    /// merges duplicate denoms, drops zeros.
    pub fn try_from_coins(coins: &[Coin]) -> Result<Self, CoinError> {
        let mut out = BTreeMap::new();
        for coin in coins {
            if coin.amount < 0 {
                return Err(CoinError::NegativeAmount {
                    denom: coin.denom.clone(),
                    amount: coin.amount,
                });
            }
            if coin.amount == 0 {
                continue;
            }
            let entry = out.entry(coin.denom.clone()).or_insert(0u128);
            *entry = entry
                .checked_add(coin.amount as u128)
                .ok_or_else(|| CoinError::Overflow {
                    denom: coin.denom.clone(),
                })?;
        }
        Ok(Self(out))
    }

    /// Amount held for a denom; zero if absent.
    pub fn amount_of(&self, denom: &str) -> u128 {
        self.0.get(denom).copied().unwrap_or(0)
    }

    /// True if no denom holds a positive amount.
    pub fn is_zero(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates `(denom, amount)` pairs in denom order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u128)> {
        self.0.iter().map(|(denom, amount)| (denom.as_str(), *amount))
    }

    /// Componentwise checked addition.
    pub fn checked_add(&self, other: &Coins) -> Result<Coins, CoinError> {
        let mut out = self.0.clone();
        for (denom, amount) in other.iter() {
            let entry = out.entry(denom.to_string()).or_insert(0u128);
            *entry = entry.checked_add(amount).ok_or_else(|| CoinError::Overflow {
                denom: denom.to_string(),
            })?;
        }
        Ok(Coins(out))
    }

    /// Componentwise checked subtraction. Fails on the first denom that
    /// would go negative; entries that reach exactly zero are removed.
    pub fn checked_sub(&self, other: &Coins) -> Result<Coins, CoinError> {
        let mut out = self.0.clone();
        for (denom, amount) in other.iter() {
            let available = self.amount_of(denom);
            if available < amount {
                return Err(CoinError::Insufficient {
                    denom: denom.to_string(),
                    required: amount,
                    available,
                });
            }
            let remaining = available - amount;
            if remaining == 0 {
                out.remove(denom);
            } else {
                out.insert(denom.to_string(), remaining);
            }
        }
        Ok(Coins(out))
    }

    /// True if `self` holds at least `other` in every denomination.
    pub fn covers(&self, other: &Coins) -> bool {
        other.iter().all(|(denom, amount)| self.amount_of(denom) >= amount)
    }

    /// Componentwise minimum over the union of denoms. Denoms missing on
    /// either side contribute zero and are dropped.
    pub fn min(&self, other: &Coins) -> Coins {
        let mut out = BTreeMap::new();
        for (denom, amount) in self.iter() {
            let m = amount.min(other.amount_of(denom));
            if m > 0 {
                out.insert(denom.to_string(), m);
            }
        }
        Coins(out)
    }
}

impl fmt::Display for Coins {
    /// Renders as `"50atom,3stake"` in denom order; empty multiset as `""`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (denom, amount) in self.iter() {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "{}{}", amount, denom)?;
            first = false;
        }
        Ok(())
    }
}
