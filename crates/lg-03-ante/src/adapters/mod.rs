//! Adapters: in-memory store implementations.

pub mod memory;

pub use memory::{InMemoryAccountStore, InMemoryBalanceStore};
