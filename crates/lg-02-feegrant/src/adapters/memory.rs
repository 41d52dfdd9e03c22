//! In-memory allowance store.

use crate::domain::entities::Grant;
use crate::ports::outbound::AllowanceStore;
use shared_types::Address;
use std::collections::HashMap;

/// In-memory implementation of AllowanceStore for testing.
#[derive(Debug, Default)]
pub struct InMemoryAllowanceStore {
    grants: HashMap<(Address, Address), Grant>,
}

impl InMemoryAllowanceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.grants.len()
    }

    /// True if no records are stored.
    pub fn is_empty(&self) -> bool {
        self.grants.is_empty()
    }
}

impl AllowanceStore for InMemoryAllowanceStore {
    fn get(&self, granter: &Address, grantee: &Address) -> Option<Grant> {
        self.grants.get(&(*granter, *grantee)).cloned()
    }

    fn set(&mut self, grant: Grant) {
        self.grants.insert((grant.granter, grant.grantee), grant);
    }

    fn remove(&mut self, granter: &Address, grantee: &Address) -> Option<Grant> {
        self.grants.remove(&(*granter, *grantee))
    }
}
