//! # Ante Validation Subsystem (LG-03)
//!
//! The ordered validation pipeline run before a transaction may mutate
//! account state: context setup, structural checks, size and signature gas,
//! fee deduction (directly or through a fee grant), public key recording,
//! signature verification against reconstructed sign bytes, and the final
//! sequence increment that provides replay protection.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): gas meter, sign bytes, decorators, handler
//! - **Ports Layer** (`ports/`): inbound API and account/balance store traits
//! - **Adapters Layer** (`adapters/`): in-memory stores for testing
//! - **Service Layer** (`service.rs`): wires the canonical chain to the ports
//!
//! ## Security Notes
//!
//! - Decorator order is part of the contract. Fee deduction runs before
//!   public-key setup so a grant can pay for a brand-new account; the
//!   sequence increment runs last so a rejected transaction never advances
//!   a sequence.
//! - Gas consumed before a rejection is billed, not refunded, and is
//!   reported alongside the error.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::memory::{InMemoryAccountStore, InMemoryBalanceStore};
pub use domain::context::{AnteContext, GasMeter};
pub use domain::decorators::AnteDecorator;
pub use domain::errors::AnteError;
pub use domain::handler::{AnteHandler, AnteOutcome, AnteRejection};
pub use domain::params::AnteParams;
pub use domain::sign_bytes::{direct_sign_bytes, legacy_json_sign_bytes, sign_bytes};
pub use ports::inbound::AnteHandlerApi;
pub use ports::outbound::{AccountStore, BalanceStore, StateAccess};
pub use service::AnteService;
