//! # Inbound Port - AnteHandlerApi
//!
//! The single entry point consumed by block-production and mempool-admission
//! callers.

use crate::domain::context::AnteContext;
use crate::domain::handler::{AnteOutcome, AnteRejection};
use crate::ports::outbound::StateAccess;
use lg_01_tx_decoder::TransactionEnvelope;

/// Primary API of the validation pipeline.
pub trait AnteHandlerApi: Send + Sync {
    /// Runs the full decorator chain over one decoded transaction.
    ///
    /// `simulate` marks a dry-run pass: the fee floor is waived and
    /// signature bytes are not checked, but structural rules, fee deduction,
    /// and sequence assumptions still apply.
    ///
    /// On rejection the error carries the gas consumed up to the failing
    /// stage so the caller can bill it.
    fn handle(
        &self,
        state: &mut StateAccess<'_>,
        ctx: &mut AnteContext,
        tx: &TransactionEnvelope,
        simulate: bool,
    ) -> Result<AnteOutcome, AnteRejection>;
}
