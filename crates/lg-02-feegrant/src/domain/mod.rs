//! Domain layer: allowance variants and ledger logic.

pub mod entities;
pub mod errors;
pub mod ledger;

pub use entities::{
    AllowedMsgAllowance, BasicAllowance, FeeAllowance, Grant, PeriodicAllowance, SpendOutcome,
};
pub use errors::FeegrantError;
pub use ledger::AllowanceLedger;
