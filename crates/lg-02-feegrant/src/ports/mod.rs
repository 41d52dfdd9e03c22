//! Port definitions for the fee allowance subsystem.

pub mod inbound;
pub mod outbound;

pub use inbound::FeeAllowanceApi;
pub use outbound::AllowanceStore;
