//! Context setup stage.

use crate::domain::context::{AnteContext, GasMeter};
use crate::domain::decorators::AnteDecorator;
use crate::domain::errors::AnteError;
use crate::ports::outbound::StateAccess;
use lg_01_tx_decoder::TransactionEnvelope;

/// Installs a gas meter bounded by the transaction's declared limit.
///
/// Must be the outermost stage: every later charge is metered against the
/// limit it installs.
pub struct SetUpContextDecorator;

impl AnteDecorator for SetUpContextDecorator {
    fn name(&self) -> &'static str {
        "setup_context"
    }

    fn ante(
        &self,
        _state: &mut StateAccess<'_>,
        ctx: &mut AnteContext,
        tx: &TransactionEnvelope,
        _simulate: bool,
    ) -> Result<(), AnteError> {
        ctx.set_gas_meter(GasMeter::limited(tx.gas_limit()));
        Ok(())
    }
}
