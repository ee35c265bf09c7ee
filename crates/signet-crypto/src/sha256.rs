//! # SHA-256 Digest Computation
//!
//! Fixed-size digest helper for the ECDSA layer. secp256k1 signs
//! 32-byte digests, so every payload flows through [`sha256`] before
//! signing, verification, or recovery.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 digest of arbitrary bytes.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let hash = Sha256::digest(data);
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&hash);
    bytes
}
