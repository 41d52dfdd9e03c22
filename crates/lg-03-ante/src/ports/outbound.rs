//! # Outbound Ports - Account, Balance, and Allowance Access
//!
//! The pipeline reads and writes account state through these narrow traits.
//! The hosting system provides the real storage engines and serializes
//! concurrent evaluations touching the same accounts; within one evaluation
//! the pipeline has exclusive access, which is why the traits are plain
//! synchronous `&mut` interfaces.

use lg_02_feegrant::FeeAllowanceApi;
use shared_types::{Account, Address, CoinError, Coins};

/// Account records keyed by address.
pub trait AccountStore: Send + Sync {
    /// Fetches the account at `address`, if it exists.
    fn get_account(&self, address: &Address) -> Option<Account>;

    /// Writes an account record, replacing any prior record at its address.
    fn set_account(&mut self, account: Account);

    /// Creates a fresh account at `address` with the next account number,
    /// no key, and sequence zero.
    fn create_account(&mut self, address: Address) -> Account;
}

/// Balances keyed by (address, denom).
pub trait BalanceStore: Send + Sync {
    /// The balance held at `address` for `denom`; zero if absent.
    fn get_balance(&self, address: &Address, denom: &str) -> u128;

    /// Atomically subtracts `amount` from the balances at `address`.
    ///
    /// # Errors
    /// - `Insufficient`: a denom cannot cover its share; nothing is
    ///   subtracted in that case
    fn subtract_balance(&mut self, address: &Address, amount: &Coins) -> Result<(), CoinError>;
}

/// The state handles threaded through one evaluation.
///
/// Borrowed exclusively for the duration of the chain run: the pipeline
/// holds no locks of its own.
pub struct StateAccess<'a> {
    /// Account records.
    pub accounts: &'a mut dyn AccountStore,
    /// Spendable balances.
    pub balances: &'a mut dyn BalanceStore,
    /// The fee allowance ledger.
    pub allowances: &'a mut dyn FeeAllowanceApi,
}
