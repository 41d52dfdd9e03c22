//! Public-key recording, signature gas, signature verification, and the
//! final sequence increment.

use crate::domain::context::AnteContext;
use crate::domain::crypto::verify_signature;
use crate::domain::decorators::AnteDecorator;
use crate::domain::errors::AnteError;
use crate::domain::sign_bytes::sign_bytes;
use crate::ports::outbound::StateAccess;
use lg_01_tx_decoder::{SignerInfo, TransactionEnvelope};
use shared_types::PublicKey;

fn signer_info_at<'a>(tx: &'a TransactionEnvelope, index: usize) -> Result<&'a SignerInfo, AnteError> {
    tx.signer_infos().get(index).ok_or_else(|| {
        AnteError::Internal(format!("missing signer info for signer at position {index}"))
    })
}

/// Records each signer's declared public key on its account, or verifies it
/// against the already-recorded key.
///
/// The positional correspondence between signers and signer infos is
/// validated here: a declared key that does not derive the signer's address
/// is an explicit rejection, never silently trusted.
pub struct SetPubKeyDecorator;

impl AnteDecorator for SetPubKeyDecorator {
    fn name(&self) -> &'static str {
        "set_pubkey"
    }

    fn ante(
        &self,
        state: &mut StateAccess<'_>,
        _ctx: &mut AnteContext,
        tx: &TransactionEnvelope,
        simulate: bool,
    ) -> Result<(), AnteError> {
        for (index, signer) in tx.signers().iter().enumerate() {
            let declared = &signer_info_at(tx, index)?.public_key;

            let mut account = match state.accounts.get_account(signer) {
                Some(account) => account,
                // A dry run may probe accounts that do not exist yet.
                None if simulate => continue,
                None => return Err(AnteError::AccountNotFound(*signer)),
            };

            let derived = declared.address();
            if derived != *signer {
                return Err(AnteError::InvalidPublicKey {
                    signer: *signer,
                    derived,
                });
            }

            if account.public_key.is_none() {
                account.public_key = Some(declared.clone());
                state.accounts.set_account(account);
            }
        }
        Ok(())
    }
}

/// Charges gas per signature, priced by key algorithm.
pub struct SigGasConsumeDecorator {
    cost_ed25519: u64,
    cost_secp256k1: u64,
}

impl SigGasConsumeDecorator {
    pub fn new(cost_ed25519: u64, cost_secp256k1: u64) -> Self {
        Self {
            cost_ed25519,
            cost_secp256k1,
        }
    }
}

impl AnteDecorator for SigGasConsumeDecorator {
    fn name(&self) -> &'static str {
        "sig_gas"
    }

    fn ante(
        &self,
        _state: &mut StateAccess<'_>,
        ctx: &mut AnteContext,
        tx: &TransactionEnvelope,
        _simulate: bool,
    ) -> Result<(), AnteError> {
        for index in 0..tx.signers().len() {
            let info = signer_info_at(tx, index)?;
            let charge = match info.public_key {
                PublicKey::Ed25519(_) => self.cost_ed25519,
                PublicKey::Secp256k1(_) => self.cost_secp256k1,
            };
            ctx.gas_meter_mut().consume(charge, "signature verification")?;
        }
        Ok(())
    }
}

/// Verifies each signature against the regenerated sign bytes, using the
/// key recorded on the account and the account's stored sequence.
pub struct SigVerificationDecorator;

impl AnteDecorator for SigVerificationDecorator {
    fn name(&self) -> &'static str {
        "sig_verification"
    }

    fn ante(
        &self,
        state: &mut StateAccess<'_>,
        ctx: &mut AnteContext,
        tx: &TransactionEnvelope,
        simulate: bool,
    ) -> Result<(), AnteError> {
        for (index, signer) in tx.signers().iter().enumerate() {
            let info = signer_info_at(tx, index)?;
            let signature = tx.signatures().get(index).ok_or_else(|| {
                AnteError::Internal(format!("missing signature at position {index}"))
            })?;

            let account = match state.accounts.get_account(signer) {
                Some(account) => account,
                None if simulate => continue,
                None => return Err(AnteError::AccountNotFound(*signer)),
            };

            // The declared sequence assumption must match stored state even
            // in a dry run; a stale assumption means the resulting
            // transaction could never be accepted.
            if info.sequence != account.sequence {
                return Err(AnteError::WrongSequence {
                    expected: account.sequence,
                    got: info.sequence,
                });
            }

            if simulate {
                continue;
            }

            let key = account
                .public_key
                .clone()
                .ok_or(AnteError::PubKeyNotSet(*signer))?;
            let bytes = sign_bytes(tx, info, &ctx.chain_id, ctx.block_height, &account)?;
            if !verify_signature(&key, &bytes, signature) {
                return Err(AnteError::SignatureVerificationFailed { signer: *signer });
            }
        }
        Ok(())
    }
}

/// Advances each signer's stored sequence number.
///
/// Must be the innermost stage: it runs only when everything before it
/// succeeded, so a rejected transaction never advances a sequence and can
/// be replayed only into the same rejection.
pub struct IncrementSequenceDecorator;

impl AnteDecorator for IncrementSequenceDecorator {
    fn name(&self) -> &'static str {
        "increment_sequence"
    }

    fn ante(
        &self,
        state: &mut StateAccess<'_>,
        _ctx: &mut AnteContext,
        tx: &TransactionEnvelope,
        simulate: bool,
    ) -> Result<(), AnteError> {
        for signer in tx.signers() {
            let mut account = match state.accounts.get_account(signer) {
                Some(account) => account,
                None if simulate => continue,
                None => return Err(AnteError::AccountNotFound(*signer)),
            };
            account.sequence += 1;
            state.accounts.set_account(account);
        }
        Ok(())
    }
}
