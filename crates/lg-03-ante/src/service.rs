//! # Ante Service
//!
//! Application service wiring the canonical decorator chain to the store
//! ports. This is the object block-production and mempool-admission callers
//! hold.

use crate::domain::context::AnteContext;
use crate::domain::handler::{AnteHandler, AnteOutcome, AnteRejection};
use crate::domain::params::AnteParams;
use crate::ports::inbound::AnteHandlerApi;
use crate::ports::outbound::StateAccess;
use lg_01_tx_decoder::TransactionEnvelope;

/// The validation pipeline behind its inbound port.
pub struct AnteService {
    params: AnteParams,
    handler: AnteHandler,
}

impl AnteService {
    /// Builds the canonical chain for the given parameters.
    pub fn new(params: AnteParams) -> Self {
        let handler = AnteHandler::canonical(&params);
        Self { params, handler }
    }

    /// The parameters this service was built with.
    pub fn params(&self) -> &AnteParams {
        &self.params
    }
}

impl Default for AnteService {
    fn default() -> Self {
        Self::new(AnteParams::default())
    }
}

impl AnteHandlerApi for AnteService {
    fn handle(
        &self,
        state: &mut StateAccess<'_>,
        ctx: &mut AnteContext,
        tx: &TransactionEnvelope,
        simulate: bool,
    ) -> Result<AnteOutcome, AnteRejection> {
        self.handler.run(state, ctx, tx, simulate)
    }
}
