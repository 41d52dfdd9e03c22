//! # Ante Chain Integration Flows
//!
//! Full canonical-chain runs over in-memory stores: structural rejection,
//! fee deduction from the signer's own balance, signature verification in
//! both sign modes, replay protection, and gas billing.

#[cfg(test)]
mod tests {
    use crate::support::{corrupt_first_signature, SignerSpec, TestChain, TestKey, TxBuilder};
    use lg_01_tx_decoder::{Message, MsgTransfer, SignMode};
    use lg_03_ante::{AnteError, AnteParams, BalanceStore};
    use shared_types::{Coin, Coins};

    fn transfer(from: &TestKey, to: &TestKey, amount: i128) -> Message {
        Message::Transfer(MsgTransfer {
            from_address: from.address(),
            to_address: to.address(),
            amount: vec![Coin::new("atom", amount)],
        })
    }

    #[test]
    fn test_valid_direct_mode_tx_accepted() {
        let mut chain = TestChain::new();
        let alice = TestKey::ed25519(1);
        let bob = TestKey::ed25519(2);
        let account = chain.create_account(&alice);
        chain.fund(alice.address(), "atom", 1_000);

        let tx = TxBuilder::new()
            .message(transfer(&alice, &bob, 5))
            .fee("atom", 50)
            .build_signed(
                &chain.chain_id.clone(),
                &[SignerSpec::direct(&alice, account.account_number, 0)],
            );

        let outcome = chain.run_tx(&tx, false).unwrap();
        assert!(outcome.gas_used > 0);
        assert_eq!(chain.sequence_of(&alice.address()), Some(1));
        assert_eq!(chain.balances.get_balance(&alice.address(), "atom"), 950);
    }

    #[test]
    fn test_decode_resolves_exactly_the_message_signer() {
        let mut chain = TestChain::new();
        let alice = TestKey::ed25519(1);
        let bob = TestKey::ed25519(2);
        chain.create_account(&alice);

        let tx = TxBuilder::new()
            .message(transfer(&alice, &bob, 5))
            .build_signed(&chain.chain_id.clone(), &[SignerSpec::direct(&alice, 0, 0)]);

        let decoded = chain.decoder.decode(&tx).unwrap();
        assert_eq!(decoded.signers(), &[alice.address()]);

        // Decoding is deterministic: same bytes, same envelope identity.
        let again = chain.decoder.decode(&tx).unwrap();
        assert_eq!(decoded.hash(), again.hash());
        assert_eq!(decoded.body_bytes(), again.body_bytes());
    }

    #[test]
    fn test_signature_count_mismatch_never_passes() {
        let mut chain = TestChain::new();
        let alice = TestKey::ed25519(1);
        let account = chain.create_account(&alice);
        chain.fund(alice.address(), "atom", 1_000);

        let bob = TestKey::ed25519(2);
        let builder = TxBuilder::new().message(transfer(&alice, &bob, 5));
        let spec = [SignerSpec::direct(&alice, account.account_number, 0)];

        // Two signatures for one signer.
        let tx = builder.build_with_signatures(&spec, vec![vec![0; 64], vec![0; 64]]);
        let rejection = chain.run_tx(&tx, false).unwrap_err();
        assert_eq!(
            rejection.error,
            AnteError::SignatureCountMismatch {
                expected: 1,
                got: 2
            }
        );

        // No signatures at all is its own failure.
        let tx = builder.build_with_signatures(&spec, vec![]);
        let rejection = chain.run_tx(&tx, false).unwrap_err();
        assert_eq!(rejection.error, AnteError::NoSignatures);
    }

    #[test]
    fn test_insufficient_funds_then_zero_fee_succeeds() {
        let mut chain = TestChain::new();
        let alice = TestKey::ed25519(1);
        let bob = TestKey::ed25519(2);
        let account = chain.create_account(&alice);
        chain.fund(alice.address(), "atom", 10);

        let tx = TxBuilder::new()
            .message(transfer(&alice, &bob, 1))
            .fee("atom", 50)
            .build_signed(
                &chain.chain_id.clone(),
                &[SignerSpec::direct(&alice, account.account_number, 0)],
            );
        let rejection = chain.run_tx(&tx, false).unwrap_err();
        assert_eq!(
            rejection.error,
            AnteError::InsufficientFunds {
                denom: "atom".to_string(),
                required: 50,
                available: 10
            }
        );
        // Nothing was deducted and the sequence did not advance.
        assert_eq!(chain.balances.get_balance(&alice.address(), "atom"), 10);
        assert_eq!(chain.sequence_of(&alice.address()), Some(0));

        // The same account with a zero fee is perfectly valid.
        let tx = TxBuilder::new()
            .message(transfer(&alice, &bob, 1))
            .build_signed(
                &chain.chain_id.clone(),
                &[SignerSpec::direct(&alice, account.account_number, 0)],
            );
        chain.run_tx(&tx, false).unwrap();
        assert_eq!(chain.sequence_of(&alice.address()), Some(1));
    }

    #[test]
    fn test_failed_verification_leaves_sequence_and_rejects_replay_identically() {
        let mut chain = TestChain::new();
        let alice = TestKey::ed25519(1);
        let bob = TestKey::ed25519(2);
        let account = chain.create_account(&alice);
        chain.fund(alice.address(), "atom", 1_000);

        let tx = TxBuilder::new()
            .message(transfer(&alice, &bob, 5))
            .fee("atom", 50)
            .build_signed(
                &chain.chain_id.clone(),
                &[SignerSpec::direct(&alice, account.account_number, 0)],
            );
        let bad = corrupt_first_signature(&tx);

        let first = chain.run_tx(&bad, false).unwrap_err();
        assert_eq!(
            first.error,
            AnteError::SignatureVerificationFailed {
                signer: alice.address()
            }
        );
        assert_eq!(chain.sequence_of(&alice.address()), Some(0));

        // Replay of the identical bytes fails identically: idempotent
        // rejection, no state drift.
        chain.fund(alice.address(), "atom", 1_000);
        let second = chain.run_tx(&bad, false).unwrap_err();
        assert_eq!(first.error, second.error);
        assert_eq!(chain.sequence_of(&alice.address()), Some(0));
    }

    #[test]
    fn test_accepted_tx_cannot_be_replayed() {
        let mut chain = TestChain::new();
        let alice = TestKey::ed25519(1);
        let bob = TestKey::ed25519(2);
        let account = chain.create_account(&alice);
        chain.fund(alice.address(), "atom", 1_000);

        let tx = TxBuilder::new()
            .message(transfer(&alice, &bob, 5))
            .fee("atom", 50)
            .build_signed(
                &chain.chain_id.clone(),
                &[SignerSpec::direct(&alice, account.account_number, 0)],
            );
        chain.run_tx(&tx, false).unwrap();

        // The stored sequence moved to 1, so the same bytes now declare a
        // stale assumption.
        let rejection = chain.run_tx(&tx, false).unwrap_err();
        assert_eq!(
            rejection.error,
            AnteError::WrongSequence {
                expected: 1,
                got: 0
            }
        );
    }

    #[test]
    fn test_gas_is_billed_on_rejection() {
        let mut chain = TestChain::new();
        let alice = TestKey::ed25519(1);
        let bob = TestKey::ed25519(2);
        let account = chain.create_account(&alice);
        // No funds: fails at fee deduction, after size gas was charged.

        let tx = TxBuilder::new()
            .message(transfer(&alice, &bob, 5))
            .fee("atom", 50)
            .build_signed(
                &chain.chain_id.clone(),
                &[SignerSpec::direct(&alice, account.account_number, 0)],
            );
        let rejection = chain.run_tx(&tx, false).unwrap_err();
        assert!(matches!(rejection.error, AnteError::InsufficientFunds { .. }));
        assert_eq!(rejection.gas_used, 10 * tx.len() as u64);
    }

    #[test]
    fn test_gas_covers_size_and_signature_costs() {
        let mut chain = TestChain::new();
        let alice = TestKey::ed25519(1);
        let bob = TestKey::ed25519(2);
        let account = chain.create_account(&alice);
        chain.fund(alice.address(), "atom", 1_000);

        let tx = TxBuilder::new()
            .message(transfer(&alice, &bob, 5))
            .fee("atom", 50)
            .build_signed(
                &chain.chain_id.clone(),
                &[SignerSpec::direct(&alice, account.account_number, 0)],
            );
        let outcome = chain.run_tx(&tx, false).unwrap();
        // Default params: 10 gas per byte plus 590 per Ed25519 signature.
        assert_eq!(outcome.gas_used, 10 * tx.len() as u64 + 590);
    }

    #[test]
    fn test_out_of_gas_fails_fast() {
        let mut chain = TestChain::new();
        let alice = TestKey::ed25519(1);
        let bob = TestKey::ed25519(2);
        let account = chain.create_account(&alice);
        chain.fund(alice.address(), "atom", 1_000);

        // A declared limit too small for even the size charge.
        let tx = TxBuilder::new()
            .message(transfer(&alice, &bob, 5))
            .fee("atom", 50)
            .gas_limit(100)
            .build_signed(
                &chain.chain_id.clone(),
                &[SignerSpec::direct(&alice, account.account_number, 0)],
            );
        let rejection = chain.run_tx(&tx, false).unwrap_err();
        assert!(matches!(rejection.error, AnteError::OutOfGas { limit: 100, .. }));
        // Billed exactly at the declared limit, never beyond.
        assert_eq!(rejection.gas_used, 100);
    }

    #[test]
    fn test_memo_length_is_bounded() {
        let mut chain = TestChain::new();
        let alice = TestKey::ed25519(1);
        let bob = TestKey::ed25519(2);
        let account = chain.create_account(&alice);

        let tx = TxBuilder::new()
            .message(transfer(&alice, &bob, 5))
            .memo(&"m".repeat(300))
            .build_signed(
                &chain.chain_id.clone(),
                &[SignerSpec::direct(&alice, account.account_number, 0)],
            );
        let rejection = chain.run_tx(&tx, false).unwrap_err();
        assert_eq!(
            rejection.error,
            AnteError::MemoTooLarge {
                length: 300,
                max: 256
            }
        );
    }

    #[test]
    fn test_gas_limit_bound_is_enforced() {
        let mut chain = TestChain::with_params(AnteParams {
            max_tx_gas: 1_000_000,
            ..AnteParams::default()
        });
        let alice = TestKey::ed25519(1);
        let bob = TestKey::ed25519(2);
        let account = chain.create_account(&alice);

        let tx = TxBuilder::new()
            .message(transfer(&alice, &bob, 5))
            .gas_limit(2_000_000)
            .build_signed(
                &chain.chain_id.clone(),
                &[SignerSpec::direct(&alice, account.account_number, 0)],
            );
        let rejection = chain.run_tx(&tx, false).unwrap_err();
        assert_eq!(
            rejection.error,
            AnteError::InvalidGasLimit {
                wanted: 2_000_000,
                max: 1_000_000
            }
        );
    }

    #[test]
    fn test_negative_fee_is_rejected() {
        let mut chain = TestChain::new();
        let alice = TestKey::ed25519(1);
        let bob = TestKey::ed25519(2);
        let account = chain.create_account(&alice);

        let tx = TxBuilder::new()
            .message(transfer(&alice, &bob, 5))
            .fee("atom", -5)
            .build_signed(
                &chain.chain_id.clone(),
                &[SignerSpec::direct(&alice, account.account_number, 0)],
            );
        let rejection = chain.run_tx(&tx, false).unwrap_err();
        assert_eq!(
            rejection.error,
            AnteError::NegativeFee {
                denom: "atom".to_string(),
                amount: -5
            }
        );
    }

    #[test]
    fn test_fee_floor_enforced_but_waived_in_simulation() {
        let mut chain = TestChain::with_params(AnteParams {
            min_fee: Coins::single("atom", 25),
            ..AnteParams::default()
        });
        let alice = TestKey::ed25519(1);
        let bob = TestKey::ed25519(2);
        let account = chain.create_account(&alice);
        chain.fund(alice.address(), "atom", 1_000);

        let tx = TxBuilder::new()
            .message(transfer(&alice, &bob, 5))
            .fee("atom", 10)
            .build_signed(
                &chain.chain_id.clone(),
                &[SignerSpec::direct(&alice, account.account_number, 0)],
            );

        let rejection = chain.run_tx(&tx, false).unwrap_err();
        assert!(matches!(rejection.error, AnteError::InsufficientFee { .. }));

        // The same transaction passes a simulation pass.
        chain.run_tx(&tx, true).unwrap();
    }

    #[test]
    fn test_zero_fee_from_nonexistent_account_fails_downstream() {
        let mut chain = TestChain::new();
        let ghost = TestKey::ed25519(9);
        let bob = TestKey::ed25519(2);

        // No account for the signer, zero fee: fee deduction passes by
        // design, then public-key setup rejects the missing account.
        let tx = TxBuilder::new()
            .message(transfer(&ghost, &bob, 1))
            .build_signed(&chain.chain_id.clone(), &[SignerSpec::direct(&ghost, 0, 0)]);
        let rejection = chain.run_tx(&tx, false).unwrap_err();
        assert_eq!(rejection.error, AnteError::AccountNotFound(ghost.address()));
    }

    #[test]
    fn test_legacy_json_mode_end_to_end() {
        let mut chain = TestChain::new();
        let alice = TestKey::ed25519(1);
        let bob = TestKey::ed25519(2);
        let account = chain.create_account(&alice);
        chain.fund(alice.address(), "atom", 1_000);

        let tx = TxBuilder::new()
            .message(transfer(&alice, &bob, 5))
            .fee("atom", 50)
            .memo("legacy")
            .build_signed(
                &chain.chain_id.clone(),
                &[SignerSpec {
                    key: &alice,
                    account_number: account.account_number,
                    sequence: 0,
                    mode: SignMode::LegacyJson,
                }],
            );
        chain.run_tx(&tx, false).unwrap();
        assert_eq!(chain.sequence_of(&alice.address()), Some(1));
    }

    #[test]
    fn test_secp256k1_signer_end_to_end() {
        let mut chain = TestChain::new();
        let carol = TestKey::secp256k1(3);
        let bob = TestKey::ed25519(2);
        let account = chain.create_account(&carol);
        chain.fund(carol.address(), "atom", 1_000);

        let tx = TxBuilder::new()
            .message(transfer(&carol, &bob, 5))
            .fee("atom", 50)
            .build_signed(
                &chain.chain_id.clone(),
                &[SignerSpec::direct(&carol, account.account_number, 0)],
            );
        let outcome = chain.run_tx(&tx, false).unwrap();
        // secp256k1 verification is priced differently.
        assert_eq!(outcome.gas_used, 10 * tx.len() as u64 + 1000);
    }

    #[test]
    fn test_textual_mode_reports_unsupported() {
        let mut chain = TestChain::new();
        let alice = TestKey::ed25519(1);
        let bob = TestKey::ed25519(2);
        let account = chain.create_account(&alice);

        let tx = TxBuilder::new()
            .message(transfer(&alice, &bob, 5))
            .build_signed(
                &chain.chain_id.clone(),
                &[SignerSpec {
                    key: &alice,
                    account_number: account.account_number,
                    sequence: 0,
                    mode: SignMode::Textual,
                }],
            );
        let rejection = chain.run_tx(&tx, false).unwrap_err();
        assert_eq!(rejection.error, AnteError::UnsupportedSignMode("textual"));
    }

    #[test]
    fn test_declared_key_must_derive_signer_address() {
        let mut chain = TestChain::new();
        let alice = TestKey::ed25519(1);
        let mallory = TestKey::ed25519(6);
        let bob = TestKey::ed25519(2);
        chain.create_account(&alice);

        // The message requires alice's signature, but the signer info
        // declares mallory's key.
        let tx = TxBuilder::new()
            .message(transfer(&alice, &bob, 5))
            .build_signed(&chain.chain_id.clone(), &[SignerSpec::direct(&mallory, 0, 0)]);
        let rejection = chain.run_tx(&tx, false).unwrap_err();
        assert_eq!(
            rejection.error,
            AnteError::InvalidPublicKey {
                signer: alice.address(),
                derived: mallory.address(),
            }
        );
    }

    #[test]
    fn test_simulation_skips_signature_bytes_but_not_sequence() {
        let mut chain = TestChain::new();
        let alice = TestKey::ed25519(1);
        let bob = TestKey::ed25519(2);
        let account = chain.create_account(&alice);
        chain.fund(alice.address(), "atom", 1_000);

        let builder = TxBuilder::new().message(transfer(&alice, &bob, 5)).fee("atom", 50);

        // Garbage signature bytes pass a dry run.
        let tx = builder.build_with_signatures(
            &[SignerSpec::direct(&alice, account.account_number, 0)],
            vec![vec![0xAB; 64]],
        );
        chain.run_tx(&tx, true).unwrap();

        // But a stale sequence assumption is still surfaced.
        let tx = builder.build_with_signatures(
            &[SignerSpec::direct(&alice, account.account_number, 7)],
            vec![vec![0xAB; 64]],
        );
        let rejection = chain.run_tx(&tx, true).unwrap_err();
        assert!(matches!(rejection.error, AnteError::WrongSequence { .. }));
    }

    #[test]
    fn test_fee_payment_emits_event() {
        let mut chain = TestChain::new();
        let alice = TestKey::ed25519(1);
        let bob = TestKey::ed25519(2);
        let account = chain.create_account(&alice);
        chain.fund(alice.address(), "atom", 1_000);

        let tx = TxBuilder::new()
            .message(transfer(&alice, &bob, 5))
            .fee("atom", 50)
            .build_signed(
                &chain.chain_id.clone(),
                &[SignerSpec::direct(&alice, account.account_number, 0)],
            );
        let outcome = chain.run_tx(&tx, false).unwrap();
        let fee_event = outcome
            .events
            .iter()
            .find(|event| event.kind == "tx_fee")
            .unwrap();
        assert!(fee_event
            .attributes
            .iter()
            .any(|(key, value)| key == "fee" && value == "50atom"));
    }
}
