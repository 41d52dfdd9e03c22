//! # Outbound Port - AllowanceStore
//!
//! Keyed persistence for allowance records. The hosting system provides the
//! real storage engine and its serialization guarantees; this core only
//! requires get/set/remove on the (granter, grantee) key.

use crate::domain::entities::Grant;
use shared_types::Address;

/// Keyed storage for allowance records.
pub trait AllowanceStore: Send + Sync {
    /// Fetches the record for the pair, if present.
    fn get(&self, granter: &Address, grantee: &Address) -> Option<Grant>;

    /// Writes the record, replacing any prior record for its pair.
    fn set(&mut self, grant: Grant);

    /// Removes and returns the record for the pair.
    fn remove(&mut self, granter: &Address, grantee: &Address) -> Option<Grant>;
}
