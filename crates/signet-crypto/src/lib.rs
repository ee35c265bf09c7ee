//! # signet-crypto — Cryptographic Primitives
//!
//! Provides the cryptographic building blocks for the Signet stack:
//!
//! - **Recoverable ECDSA** over secp256k1: key pair generation, signing,
//!   verification, and public-key recovery.
//! - **Address derivation** from uncompressed public keys.
//! - **SHA-256** digest computation; every ECDSA operation signs and
//!   verifies over the SHA-256 digest of the payload, so callers work
//!   with arbitrary-length byte strings.
//!
//! ## Crate Policy
//!
//! - Depends only on `signet-core` internally.
//! - No mocking of cryptographic operations in tests — all tests use
//!   real key pairs, real SHA-256, real secp256k1.
//! - Secret key material is never exposed through `Debug` or serde.

pub mod ecdsa;
pub mod sha256;

pub use ecdsa::{address_from_public_key, recover, verify, KeyPair, Signature};
pub use sha256::sha256;
