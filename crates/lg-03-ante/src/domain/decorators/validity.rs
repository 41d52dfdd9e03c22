//! Structural validation stages: fee floor, basic shape, memo, size gas,
//! and signer count.

use crate::domain::context::AnteContext;
use crate::domain::decorators::AnteDecorator;
use crate::domain::errors::AnteError;
use crate::ports::outbound::StateAccess;
use lg_01_tx_decoder::TransactionEnvelope;
use shared_types::Coins;

/// Rejects transactions whose fee is below the configured mempool floor.
///
/// Skipped during simulation: a dry run estimates gas for a fee the caller
/// has not committed to yet.
pub struct MempoolFeeDecorator {
    min_fee: Coins,
}

impl MempoolFeeDecorator {
    pub fn new(min_fee: Coins) -> Self {
        Self { min_fee }
    }
}

impl AnteDecorator for MempoolFeeDecorator {
    fn name(&self) -> &'static str {
        "mempool_fee"
    }

    fn ante(
        &self,
        _state: &mut StateAccess<'_>,
        _ctx: &mut AnteContext,
        tx: &TransactionEnvelope,
        simulate: bool,
    ) -> Result<(), AnteError> {
        if simulate || self.min_fee.is_zero() {
            return Ok(());
        }
        let fee = tx.fee_coins()?;
        if !fee.covers(&self.min_fee) {
            return Err(AnteError::InsufficientFee {
                required: self.min_fee.clone(),
                provided: fee,
            });
        }
        Ok(())
    }
}

/// Shape checks that need no account state: gas bound, non-negative fee,
/// signature presence, and signature/signer count equality.
pub struct ValidateBasicDecorator {
    max_tx_gas: u64,
}

impl ValidateBasicDecorator {
    pub fn new(max_tx_gas: u64) -> Self {
        Self { max_tx_gas }
    }
}

impl AnteDecorator for ValidateBasicDecorator {
    fn name(&self) -> &'static str {
        "validate_basic"
    }

    fn ante(
        &self,
        _state: &mut StateAccess<'_>,
        _ctx: &mut AnteContext,
        tx: &TransactionEnvelope,
        _simulate: bool,
    ) -> Result<(), AnteError> {
        if tx.gas_limit() > self.max_tx_gas {
            return Err(AnteError::InvalidGasLimit {
                wanted: tx.gas_limit(),
                max: self.max_tx_gas,
            });
        }
        for coin in &tx.fee().amount {
            if coin.amount < 0 {
                return Err(AnteError::NegativeFee {
                    denom: coin.denom.clone(),
                    amount: coin.amount,
                });
            }
        }
        if tx.signatures().is_empty() {
            return Err(AnteError::NoSignatures);
        }
        if tx.signatures().len() != tx.signers().len() {
            return Err(AnteError::SignatureCountMismatch {
                expected: tx.signers().len(),
                got: tx.signatures().len(),
            });
        }
        Ok(())
    }
}

/// Bounds the memo length.
pub struct ValidateMemoDecorator {
    max_memo_characters: usize,
}

impl ValidateMemoDecorator {
    pub fn new(max_memo_characters: usize) -> Self {
        Self { max_memo_characters }
    }
}

impl AnteDecorator for ValidateMemoDecorator {
    fn name(&self) -> &'static str {
        "validate_memo"
    }

    fn ante(
        &self,
        _state: &mut StateAccess<'_>,
        _ctx: &mut AnteContext,
        tx: &TransactionEnvelope,
        _simulate: bool,
    ) -> Result<(), AnteError> {
        let length = tx.memo().chars().count();
        if length > self.max_memo_characters {
            return Err(AnteError::MemoTooLarge {
                length,
                max: self.max_memo_characters,
            });
        }
        Ok(())
    }
}

/// Charges gas proportional to the encoded transaction size.
pub struct ConsumeTxSizeGasDecorator {
    cost_per_byte: u64,
}

impl ConsumeTxSizeGasDecorator {
    pub fn new(cost_per_byte: u64) -> Self {
        Self { cost_per_byte }
    }
}

impl AnteDecorator for ConsumeTxSizeGasDecorator {
    fn name(&self) -> &'static str {
        "tx_size_gas"
    }

    fn ante(
        &self,
        _state: &mut StateAccess<'_>,
        ctx: &mut AnteContext,
        tx: &TransactionEnvelope,
        _simulate: bool,
    ) -> Result<(), AnteError> {
        let charge = self.cost_per_byte.saturating_mul(tx.encoded_len() as u64);
        ctx.gas_meter_mut().consume(charge, "tx size")
    }
}

/// Bounds the number of signatures on one transaction.
pub struct ValidateSigCountDecorator {
    max_signatures: usize,
}

impl ValidateSigCountDecorator {
    pub fn new(max_signatures: usize) -> Self {
        Self { max_signatures }
    }
}

impl AnteDecorator for ValidateSigCountDecorator {
    fn name(&self) -> &'static str {
        "sig_count"
    }

    fn ante(
        &self,
        _state: &mut StateAccess<'_>,
        _ctx: &mut AnteContext,
        tx: &TransactionEnvelope,
        _simulate: bool,
    ) -> Result<(), AnteError> {
        let count = tx.signatures().len();
        if count > self.max_signatures {
            return Err(AnteError::TooManySignatures {
                count,
                max: self.max_signatures,
            });
        }
        Ok(())
    }
}
