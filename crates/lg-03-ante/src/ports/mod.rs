//! Port definitions for the ante validation subsystem.

pub mod inbound;
pub mod outbound;

pub use inbound::AnteHandlerApi;
pub use outbound::{AccountStore, BalanceStore, StateAccess};
