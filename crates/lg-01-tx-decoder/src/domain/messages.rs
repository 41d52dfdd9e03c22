//! # Message Set and Registry
//!
//! Messages are a closed enum dispatched by type URL through the registry.
//! Each message knows its required signers and its canonical JSON form (the
//! legacy sign mode signs over that form, so field content here is part of
//! the signing contract).

use crate::domain::entities::AnyMessage;
use crate::domain::errors::DecodeError;
use lg_02_feegrant::FeeAllowance;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use shared_types::{hex_addr, Address, Coin};
use std::collections::HashMap;

/// Type URL of the bank transfer message.
pub const TRANSFER_URL: &str = "/lg.bank.v1.MsgTransfer";
/// Type URL of the fee allowance grant message.
pub const GRANT_ALLOWANCE_URL: &str = "/lg.feegrant.v1.MsgGrantAllowance";
/// Type URL of the fee allowance revoke message.
pub const REVOKE_ALLOWANCE_URL: &str = "/lg.feegrant.v1.MsgRevokeAllowance";

/// Moves funds between two accounts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgTransfer {
    pub from_address: Address,
    pub to_address: Address,
    pub amount: Vec<Coin>,
}

/// Grants a fee allowance from `granter` to `grantee`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgGrantAllowance {
    pub granter: Address,
    pub grantee: Address,
    pub allowance: FeeAllowance,
}

/// Revokes the fee allowance from `granter` to `grantee`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgRevokeAllowance {
    pub granter: Address,
    pub grantee: Address,
}

/// A decoded transaction message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Message {
    Transfer(MsgTransfer),
    GrantAllowance(MsgGrantAllowance),
    RevokeAllowance(MsgRevokeAllowance),
}

impl Message {
    /// The registered type URL of this message.
    pub fn type_url(&self) -> &'static str {
        match self {
            Self::Transfer(_) => TRANSFER_URL,
            Self::GrantAllowance(_) => GRANT_ALLOWANCE_URL,
            Self::RevokeAllowance(_) => REVOKE_ALLOWANCE_URL,
        }
    }

    /// The addresses that must sign a transaction carrying this message,
    /// in declared order.
    pub fn signers(&self) -> Vec<Address> {
        match self {
            Self::Transfer(msg) => vec![msg.from_address],
            Self::GrantAllowance(msg) => vec![msg.granter],
            Self::RevokeAllowance(msg) => vec![msg.granter],
        }
    }

    /// Canonical JSON form for the legacy sign mode.
    ///
    /// Keys are emitted in sorted order (serde_json maps are BTree-backed),
    /// addresses as lowercase hex, amounts as strings. This shape is part of
    /// the signing contract: changing it invalidates existing signatures.
    pub fn canonical_json(&self) -> Value {
        match self {
            Self::Transfer(msg) => json!({
                "type": "bank/MsgTransfer",
                "value": {
                    "amount": coins_json(&msg.amount),
                    "from_address": hex_addr(&msg.from_address),
                    "to_address": hex_addr(&msg.to_address),
                }
            }),
            Self::GrantAllowance(msg) => json!({
                "type": "feegrant/MsgGrantAllowance",
                "value": {
                    "grantee": hex_addr(&msg.grantee),
                    "granter": hex_addr(&msg.granter),
                }
            }),
            Self::RevokeAllowance(msg) => json!({
                "type": "feegrant/MsgRevokeAllowance",
                "value": {
                    "grantee": hex_addr(&msg.grantee),
                    "granter": hex_addr(&msg.granter),
                }
            }),
        }
    }
}

fn coins_json(coins: &[Coin]) -> Value {
    Value::Array(
        coins
            .iter()
            .map(|coin| {
                json!({
                    "amount": coin.amount.to_string(),
                    "denom": coin.denom,
                })
            })
            .collect(),
    )
}

type MessageDecoder = fn(&[u8]) -> Result<Message, DecodeError>;

/// Maps type URLs to message decoders.
///
/// The default registry holds the built-in message set; hosts may register
/// additional decoders before constructing the transaction decoder. A type
/// URL without a decoder fails the whole transaction at decode time.
pub struct MessageRegistry {
    decoders: HashMap<&'static str, MessageDecoder>,
}

impl MessageRegistry {
    /// An empty registry with no known message types.
    pub fn empty() -> Self {
        Self {
            decoders: HashMap::new(),
        }
    }

    /// Registers a decoder for a type URL, replacing any prior entry.
    pub fn register(&mut self, type_url: &'static str, decoder: MessageDecoder) {
        self.decoders.insert(type_url, decoder);
    }

    /// Dispatches a type-tagged payload to its registered decoder.
    pub fn decode(&self, any: &AnyMessage) -> Result<Message, DecodeError> {
        let decoder = self
            .decoders
            .get(any.type_url.as_str())
            .ok_or_else(|| DecodeError::UnregisteredMessageType(any.type_url.clone()))?;
        decoder(&any.value)
    }
}

impl Default for MessageRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(TRANSFER_URL, |bytes| {
            let msg: MsgTransfer = decode_payload(bytes)?;
            Ok(Message::Transfer(msg))
        });
        registry.register(GRANT_ALLOWANCE_URL, |bytes| {
            let msg: MsgGrantAllowance = decode_payload(bytes)?;
            Ok(Message::GrantAllowance(msg))
        });
        registry.register(REVOKE_ALLOWANCE_URL, |bytes| {
            let msg: MsgRevokeAllowance = decode_payload(bytes)?;
            Ok(Message::RevokeAllowance(msg))
        });
        registry
    }
}

fn decode_payload<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T, DecodeError> {
    bincode::deserialize(bytes).map_err(|err| DecodeError::Malformed(err.to_string()))
}
