//! # Sign-Byte Generation
//!
//! Deterministically reproduces the exact byte sequence a signer must have
//! signed, branching on the declared sign mode. Every unhandled branch is an
//! explicit, distinguishable failure - there is no default byte sequence to
//! fall through to.

use crate::domain::errors::AnteError;
use lg_01_tx_decoder::{Fee, Message, ModeInfo, SignMode, SignerInfo, TransactionEnvelope};
use serde::Serialize;
use serde_json::json;
use shared_types::Account;

/// The direct-mode sign document. Serialized with the same codec as the
/// wire frames; the body and auth-info fields are the retained raw buffers,
/// never a re-serialization.
#[derive(Serialize)]
struct SignDoc<'a> {
    body_bytes: &'a [u8],
    auth_info_bytes: &'a [u8],
    chain_id: &'a str,
    account_number: u64,
    sequence: u64,
}

/// Builds direct-mode sign bytes over the retained raw buffers.
pub fn direct_sign_bytes(
    body_bytes: &[u8],
    auth_info_bytes: &[u8],
    chain_id: &str,
    account_number: u64,
    sequence: u64,
) -> Result<Vec<u8>, AnteError> {
    let doc = SignDoc {
        body_bytes,
        auth_info_bytes,
        chain_id,
        account_number,
        sequence,
    };
    bincode::serialize(&doc).map_err(|err| AnteError::Internal(format!("sign doc encoding: {err}")))
}

/// Builds legacy-mode sign bytes: a canonical JSON document.
///
/// Field order is part of the signing contract. serde_json maps are
/// BTree-backed, so keys serialize in sorted order: account_number,
/// chain_id, fee, memo, msgs, sequence. Integers are rendered as strings.
pub fn legacy_json_sign_bytes(
    chain_id: &str,
    account_number: u64,
    sequence: u64,
    fee: &Fee,
    memo: &str,
    msgs: &[Message],
) -> Result<Vec<u8>, AnteError> {
    let amounts: Vec<serde_json::Value> = fee
        .amount
        .iter()
        .map(|coin| {
            json!({
                "amount": coin.amount.to_string(),
                "denom": coin.denom,
            })
        })
        .collect();
    let msgs: Vec<serde_json::Value> = msgs.iter().map(Message::canonical_json).collect();

    let doc = json!({
        "account_number": account_number.to_string(),
        "chain_id": chain_id,
        "fee": {
            "amount": amounts,
            "gas": fee.gas_limit.to_string(),
        },
        "memo": memo,
        "msgs": msgs,
        "sequence": sequence.to_string(),
    });
    serde_json::to_vec(&doc).map_err(|err| AnteError::Internal(format!("sign doc encoding: {err}")))
}

/// Reproduces the sign bytes for one signer of `tx`.
///
/// The account number is zero during pre-genesis (height-0) validation and
/// the account's real number otherwise; the sequence is always the
/// account's stored sequence.
pub fn sign_bytes(
    tx: &TransactionEnvelope,
    signer_info: &SignerInfo,
    chain_id: &str,
    block_height: u64,
    account: &Account,
) -> Result<Vec<u8>, AnteError> {
    let account_number = if block_height == 0 {
        0
    } else {
        account.account_number
    };

    match &signer_info.mode_info {
        ModeInfo::Single(mode) => match mode {
            SignMode::Unspecified => Err(AnteError::UnspecifiedSignMode),
            SignMode::Direct => direct_sign_bytes(
                tx.body_bytes(),
                tx.auth_info_bytes(),
                chain_id,
                account_number,
                account.sequence,
            ),
            SignMode::Textual => Err(AnteError::UnsupportedSignMode("textual")),
            SignMode::LegacyJson => legacy_json_sign_bytes(
                chain_id,
                account_number,
                account.sequence,
                tx.fee(),
                tx.memo(),
                tx.msgs(),
            ),
        },
        ModeInfo::Multi { .. } => Err(AnteError::MultisigNotSupported),
    }
}
