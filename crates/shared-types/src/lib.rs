//! # Shared Types Crate
//!
//! Cross-subsystem domain types for LedgerGuard: addresses, public keys,
//! coin multisets, accounts, timestamps, and event records.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: every type shared by two or more subsystems
//!   is defined here.
//! - **Checked Arithmetic**: `Coins` can never go negative or overflow; all
//!   fallible operations return `Result`.
//! - **Closed Key Set**: `PublicKey` is a closed enum so unknown key
//!   algorithms are rejected at decode time instead of being defaulted.

pub mod coins;
pub mod entities;
pub mod errors;

pub use coins::{Coin, Coins};
pub use entities::*;
pub use errors::CoinError;
