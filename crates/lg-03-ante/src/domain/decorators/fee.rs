//! Fee deduction stage.

use crate::domain::context::AnteContext;
use crate::domain::decorators::AnteDecorator;
use crate::domain::errors::AnteError;
use crate::ports::outbound::StateAccess;
use lg_01_tx_decoder::TransactionEnvelope;
use shared_types::{hex_addr, Address, Coins, Event};
use tracing::debug;

/// Resolves the fee payer and deducts the fee, either from the payer's own
/// balance or through a fee allowance granted to the first signer.
///
/// Must run before public-key setup: a grant can pay for a brand-new
/// account, which this stage creates on the fly so the key-recording stage
/// finds it.
pub struct DeductFeeDecorator;

impl DeductFeeDecorator {
    fn deduct_direct(
        &self,
        state: &mut StateAccess<'_>,
        ctx: &mut AnteContext,
        payer: Address,
        fee: &Coins,
    ) -> Result<(), AnteError> {
        if fee.is_zero() {
            // No fee owed. An absent account passes here by design; stages
            // that need the account to exist reject it themselves.
            return Ok(());
        }
        if state.accounts.get_account(&payer).is_none() {
            return Err(AnteError::AccountNotFound(payer));
        }
        state.balances.subtract_balance(&payer, fee)?;
        ctx.emit(
            Event::new("tx_fee")
                .attr("payer", hex_addr(&payer))
                .attr("fee", fee.to_string()),
        );
        Ok(())
    }

    fn deduct_granted(
        &self,
        state: &mut StateAccess<'_>,
        ctx: &mut AnteContext,
        granter: Address,
        grantee: Address,
        fee: &Coins,
        tx: &TransactionEnvelope,
    ) -> Result<(), AnteError> {
        // Absence (or expiry, which reads the same) is reported before any
        // other failure on this path.
        if state.allowances.get(&granter, &grantee, ctx.block_time).is_none() {
            return Err(AnteError::NoAllowance { granter, grantee });
        }
        if state.accounts.get_account(&granter).is_none() {
            return Err(AnteError::AccountNotFound(granter));
        }
        // Check the granter can cover the fee before touching the
        // allowance, so a doomed attempt leaves the grant untouched.
        for (denom, required) in fee.iter() {
            let available = state.balances.get_balance(&granter, denom);
            if available < required {
                return Err(AnteError::InsufficientFunds {
                    denom: denom.to_string(),
                    required,
                    available,
                });
            }
        }

        let msg_type_urls: Vec<&str> = tx.msgs().iter().map(|msg| msg.type_url()).collect();
        state
            .allowances
            .use_allowance(&granter, &grantee, fee, ctx.block_time, &msg_type_urls)
            .map_err(|err| AnteError::from_feegrant(err, granter, grantee))?;

        if !fee.is_zero() {
            state.balances.subtract_balance(&granter, fee)?;
        }

        // A grantee paying through a grant may not exist yet; create it so
        // public-key setup can record its key.
        if state.accounts.get_account(&grantee).is_none() {
            let account = state.accounts.create_account(grantee);
            debug!(
                grantee = %hex_addr(&grantee),
                account_number = account.account_number,
                "created fee-granted account"
            );
        }

        ctx.emit(
            Event::new("use_fee_grant")
                .attr("granter", hex_addr(&granter))
                .attr("grantee", hex_addr(&grantee)),
        );
        if !fee.is_zero() {
            ctx.emit(
                Event::new("tx_fee")
                    .attr("payer", hex_addr(&granter))
                    .attr("fee", fee.to_string()),
            );
        }
        Ok(())
    }
}

impl AnteDecorator for DeductFeeDecorator {
    fn name(&self) -> &'static str {
        "deduct_fee"
    }

    fn ante(
        &self,
        state: &mut StateAccess<'_>,
        ctx: &mut AnteContext,
        tx: &TransactionEnvelope,
        _simulate: bool,
    ) -> Result<(), AnteError> {
        let fee = tx.fee_coins()?;
        let payer = tx
            .fee_payer()
            .ok_or_else(|| AnteError::Internal("transaction has no signers".to_string()))?;
        let first_signer = tx
            .signers()
            .first()
            .copied()
            .ok_or_else(|| AnteError::Internal("transaction has no signers".to_string()))?;

        if payer == first_signer {
            self.deduct_direct(state, ctx, payer, &fee)
        } else {
            self.deduct_granted(state, ctx, payer, first_signer, &fee, tx)
        }
    }
}
