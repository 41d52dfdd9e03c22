//! # Fee Allowance Subsystem (LG-02)
//!
//! A keyed ledger of third-party fee-spending grants. A granter account
//! stands behind a grantee's transaction fees up to a spend limit, with an
//! optional expiration and variant-specific policy (periodic reset,
//! message-type filtering).
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): allowance variants and the ledger logic
//! - **Ports Layer** (`ports/`): inbound API and outbound store traits
//! - **Adapters Layer** (`adapters/`): in-memory store for testing
//!
//! ## Invariants
//!
//! - At most one allowance per (granter, grantee) pair; granting replaces.
//! - A remaining spend limit never goes negative; spends are all-or-nothing.
//! - A spend that drains the limit to exactly zero deletes the record.
//! - An expired allowance behaves identically to an absent one.

pub mod adapters;
pub mod domain;
pub mod ports;

pub use adapters::memory::InMemoryAllowanceStore;
pub use domain::entities::{
    AllowedMsgAllowance, BasicAllowance, FeeAllowance, Grant, PeriodicAllowance, SpendOutcome,
};
pub use domain::errors::FeegrantError;
pub use domain::ledger::AllowanceLedger;
pub use ports::inbound::FeeAllowanceApi;
pub use ports::outbound::AllowanceStore;
