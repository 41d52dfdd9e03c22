//! In-memory account and balance stores.

use crate::ports::outbound::{AccountStore, BalanceStore};
use shared_types::{Account, Address, CoinError, Coins};
use std::collections::HashMap;

/// In-memory implementation of AccountStore for testing.
#[derive(Debug, Default)]
pub struct InMemoryAccountStore {
    accounts: HashMap<Address, Account>,
    next_account_number: u64,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// True if no accounts are stored.
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl AccountStore for InMemoryAccountStore {
    fn get_account(&self, address: &Address) -> Option<Account> {
        self.accounts.get(address).cloned()
    }

    fn set_account(&mut self, account: Account) {
        // Keep the allocator ahead of externally numbered accounts.
        if account.account_number >= self.next_account_number {
            self.next_account_number = account.account_number + 1;
        }
        self.accounts.insert(account.address, account);
    }

    fn create_account(&mut self, address: Address) -> Account {
        let account = Account::new(address, self.next_account_number);
        self.next_account_number += 1;
        self.accounts.insert(address, account.clone());
        account
    }
}

/// In-memory implementation of BalanceStore for testing.
#[derive(Debug, Default)]
pub struct InMemoryBalanceStore {
    balances: HashMap<(Address, String), u128>,
}

impl InMemoryBalanceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the balance for one (address, denom) pair.
    pub fn set_balance(&mut self, address: Address, denom: &str, amount: u128) {
        self.balances.insert((address, denom.to_string()), amount);
    }
}

impl BalanceStore for InMemoryBalanceStore {
    fn get_balance(&self, address: &Address, denom: &str) -> u128 {
        self.balances
            .get(&(*address, denom.to_string()))
            .copied()
            .unwrap_or(0)
    }

    fn subtract_balance(&mut self, address: &Address, amount: &Coins) -> Result<(), CoinError> {
        // Validate every denom before mutating any, so a failed subtraction
        // leaves all balances untouched.
        for (denom, required) in amount.iter() {
            let available = self.get_balance(address, denom);
            if available < required {
                return Err(CoinError::Insufficient {
                    denom: denom.to_string(),
                    required,
                    available,
                });
            }
        }
        for (denom, required) in amount.iter() {
            let available = self.get_balance(address, denom);
            self.balances
                .insert((*address, denom.to_string()), available - required);
        }
        Ok(())
    }
}
