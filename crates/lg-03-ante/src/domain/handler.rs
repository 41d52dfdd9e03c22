//! # Chain Composition
//!
//! Builds one callable from the ordered decorator list and runs it to a
//! decision. Gas consumed before a rejection is billed, not refunded, and
//! travels with the error.

use crate::domain::context::AnteContext;
use crate::domain::decorators::{
    AnteDecorator, ConsumeTxSizeGasDecorator, DeductFeeDecorator, IncrementSequenceDecorator,
    MempoolFeeDecorator, SetPubKeyDecorator, SetUpContextDecorator, SigGasConsumeDecorator,
    SigVerificationDecorator, ValidateBasicDecorator, ValidateMemoDecorator,
    ValidateSigCountDecorator,
};
use crate::domain::errors::AnteError;
use crate::domain::params::AnteParams;
use crate::ports::outbound::StateAccess;
use lg_01_tx_decoder::TransactionEnvelope;
use shared_types::Event;
use std::fmt;
use tracing::{debug, warn};

/// The result of an accepted evaluation.
#[derive(Clone, Debug)]
pub struct AnteOutcome {
    /// Total gas consumed by the chain.
    pub gas_used: u64,
    /// Events accumulated during the evaluation.
    pub events: Vec<Event>,
}

/// A rejected evaluation: the terminal error plus the gas consumed up to
/// the failing stage, which the caller bills regardless.
#[derive(Clone, Debug)]
pub struct AnteRejection {
    /// The stage failure that aborted the chain.
    pub error: AnteError,
    /// Gas consumed before the failure.
    pub gas_used: u64,
}

impl fmt::Display for AnteRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (gas used: {})", self.error, self.gas_used)
    }
}

impl std::error::Error for AnteRejection {}

/// The composed validation pipeline.
pub struct AnteHandler {
    decorators: Vec<Box<dyn AnteDecorator>>,
}

impl AnteHandler {
    /// A handler over an explicit decorator list. Order is the caller's
    /// responsibility; prefer `canonical` unless composing a partial chain
    /// for tests.
    pub fn new(decorators: Vec<Box<dyn AnteDecorator>>) -> Self {
        Self { decorators }
    }

    /// The canonical eleven-stage chain, outermost first.
    ///
    /// The order is part of the security contract:
    /// - fee deduction precedes public-key setup so a fee grant can pay
    ///   for a brand-new account;
    /// - signature verification follows key setup and gas charging;
    /// - the sequence increment is last, so only fully-accepted
    ///   transactions advance sequences.
    pub fn canonical(params: &AnteParams) -> Self {
        Self::new(vec![
            Box::new(SetUpContextDecorator),
            Box::new(MempoolFeeDecorator::new(params.min_fee.clone())),
            Box::new(ValidateBasicDecorator::new(params.max_tx_gas)),
            Box::new(ValidateMemoDecorator::new(params.max_memo_characters)),
            Box::new(ConsumeTxSizeGasDecorator::new(params.tx_size_cost_per_byte)),
            Box::new(DeductFeeDecorator),
            Box::new(SetPubKeyDecorator),
            Box::new(ValidateSigCountDecorator::new(params.max_signatures)),
            Box::new(SigGasConsumeDecorator::new(
                params.sig_verify_cost_ed25519,
                params.sig_verify_cost_secp256k1,
            )),
            Box::new(SigVerificationDecorator),
            Box::new(IncrementSequenceDecorator),
        ])
    }

    /// Runs every stage in order. The first failure aborts the chain; no
    /// later stage runs, and the error carries the gas billed so far.
    pub fn run(
        &self,
        state: &mut StateAccess<'_>,
        ctx: &mut AnteContext,
        tx: &TransactionEnvelope,
        simulate: bool,
    ) -> Result<AnteOutcome, AnteRejection> {
        for decorator in &self.decorators {
            debug!(stage = decorator.name(), simulate, "running ante stage");
            if let Err(error) = decorator.ante(state, ctx, tx, simulate) {
                let gas_used = ctx.gas_meter().consumed();
                warn!(
                    stage = decorator.name(),
                    %error,
                    gas_used,
                    "transaction rejected"
                );
                return Err(AnteRejection { error, gas_used });
            }
        }
        Ok(AnteOutcome {
            gas_used: ctx.gas_meter().consumed(),
            events: ctx.events().to_vec(),
        })
    }
}
