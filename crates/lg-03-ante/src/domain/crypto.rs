//! # Signature Verification Primitives
//!
//! Thin wrappers over the curve crates. Any parse or verification failure
//! collapses to `false`: from the pipeline's point of view a malformed
//! signature and a wrong one are the same rejection.

use ed25519_dalek::Verifier as _;
use k256::ecdsa::signature::Verifier as _;
use shared_types::PublicKey;

/// Verifies `signature` over `message` with `key`.
///
/// secp256k1 signatures are ECDSA over the SHA-256 digest of the message
/// (the curve crate hashes internally); Ed25519 signs the message directly.
pub fn verify_signature(key: &PublicKey, message: &[u8], signature: &[u8]) -> bool {
    match key {
        PublicKey::Ed25519(bytes) => {
            let Ok(verifying_key) = ed25519_dalek::VerifyingKey::from_bytes(bytes) else {
                return false;
            };
            let Ok(sig) = ed25519_dalek::Signature::from_slice(signature) else {
                return false;
            };
            verifying_key.verify(message, &sig).is_ok()
        }
        PublicKey::Secp256k1(bytes) => {
            let Ok(verifying_key) = k256::ecdsa::VerifyingKey::from_sec1_bytes(bytes) else {
                return false;
            };
            let Ok(sig) = k256::ecdsa::Signature::from_slice(signature) else {
                return false;
            };
            verifying_key.verify(message, &sig).is_ok()
        }
    }
}
