//! # Decorator Stages
//!
//! Each decorator is one unit of validation. The handler composes them by
//! explicit sequential fold over a fixed-order list; a stage that fails
//! aborts the remainder of the chain.
//!
//! The canonical order lives in `AnteHandler::canonical` and is part of the
//! security contract - see the notes on `DeductFeeDecorator` (must precede
//! public-key setup) and `IncrementSequenceDecorator` (must run last).

pub mod fee;
pub mod setup;
pub mod signatures;
pub mod validity;

use crate::domain::context::AnteContext;
use crate::domain::errors::AnteError;
use crate::ports::outbound::StateAccess;
use lg_01_tx_decoder::TransactionEnvelope;

pub use fee::DeductFeeDecorator;
pub use setup::SetUpContextDecorator;
pub use signatures::{
    IncrementSequenceDecorator, SetPubKeyDecorator, SigGasConsumeDecorator,
    SigVerificationDecorator,
};
pub use validity::{
    ConsumeTxSizeGasDecorator, MempoolFeeDecorator, ValidateBasicDecorator, ValidateMemoDecorator,
    ValidateSigCountDecorator,
};

/// One stage of the validation pipeline.
pub trait AnteDecorator: Send + Sync {
    /// Stage name for tracing and rejection reports.
    fn name(&self) -> &'static str;

    /// Validates `tx`, possibly consuming gas and mutating state.
    ///
    /// A returned error is terminal for the whole evaluation.
    fn ante(
        &self,
        state: &mut StateAccess<'_>,
        ctx: &mut AnteContext,
        tx: &TransactionEnvelope,
        simulate: bool,
    ) -> Result<(), AnteError>;
}
