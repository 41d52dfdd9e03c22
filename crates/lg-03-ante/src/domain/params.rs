//! Ante pipeline configuration.

use shared_types::Coins;

/// Tunable limits and costs of the validation pipeline.
#[derive(Clone, Debug)]
pub struct AnteParams {
    /// Maximum memo length in characters.
    pub max_memo_characters: usize,
    /// Maximum declared gas limit accepted at all.
    pub max_tx_gas: u64,
    /// Gas charged per byte of encoded transaction.
    pub tx_size_cost_per_byte: u64,
    /// Gas charged to verify one Ed25519 signature.
    pub sig_verify_cost_ed25519: u64,
    /// Gas charged to verify one secp256k1 signature.
    pub sig_verify_cost_secp256k1: u64,
    /// Maximum number of signatures on one transaction.
    pub max_signatures: usize,
    /// Mempool admission fee floor. Empty disables the check.
    pub min_fee: Coins,
}

impl Default for AnteParams {
    fn default() -> Self {
        Self {
            max_memo_characters: 256,
            max_tx_gas: (1 << 63) - 1,
            tx_size_cost_per_byte: 10,
            sig_verify_cost_ed25519: 590,
            sig_verify_cost_secp256k1: 1000,
            max_signatures: 7,
            min_fee: Coins::new(),
        }
    }
}
