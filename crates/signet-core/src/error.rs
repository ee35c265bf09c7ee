//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used throughout the Signet stack. All errors
//! use `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - An unknown address is an expected, recoverable outcome with its own
//!   variant so callers can answer "do I control this address?" by
//!   matching on it.
//! - Backend signing failures carry the address and the backend's reason;
//!   the registry propagates them without retrying or rewording.
//! - Cryptographic input errors (malformed keys, malformed signatures)
//!   surface verbatim from the primitive layer.

use thiserror::Error;

use crate::address::Address;

/// Errors surfaced by the wallet registry and its backends.
#[derive(Error, Debug)]
pub enum WalletError {
    /// The address is not held by any registered backend.
    ///
    /// Recoverable: callers branch on this variant to decide whether
    /// they control an address.
    #[error("unknown address: {0}")]
    UnknownAddress(Address),

    /// The resolved backend could not produce a signature
    /// (e.g. locked key, hardware I/O error).
    #[error("backend {backend} failed to sign with {address}: {reason}")]
    SigningFailed {
        /// Diagnostic name of the backend kind that failed.
        backend: String,
        /// The address signing was attempted for.
        address: Address,
        /// The backend's own failure description.
        reason: String,
    },

    /// A cryptographic primitive rejected its input.
    #[error(transparent)]
    Crypto(#[from] CryptoError),
}

/// Errors from the secp256k1 primitive layer.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// Secret key bytes are out of range or the wrong length.
    #[error("invalid secret key: {0}")]
    InvalidSecretKey(String),

    /// Public key bytes do not encode a curve point.
    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    /// Signature bytes are not a well-formed recoverable signature.
    #[error("malformed signature: {0}")]
    MalformedSignature(String),

    /// No public key could be recovered from the signature and data.
    #[error("public key recovery failed: {0}")]
    RecoveryFailed(String),
}

/// Error parsing an [`Address`] from its hex representation.
#[derive(Error, Debug)]
pub enum AddressError {
    /// The hex string has the wrong length.
    #[error("address hex must be {expected} chars, got {actual}")]
    InvalidLength {
        /// Required number of hex characters.
        expected: usize,
        /// Number of characters supplied.
        actual: usize,
    },

    /// The string contains non-hex characters.
    #[error("invalid address hex: {0}")]
    InvalidHex(String),
}
