//! # Recoverable ECDSA over secp256k1
//!
//! Provides key pair generation, signing, verification, and public-key
//! recovery for the wallet facade.
//!
//! ## Wire Format
//!
//! - Signatures are 65 bytes: the 64-byte compact `r || s` encoding
//!   followed by a 1-byte recovery id. The recovery id lets
//!   [`recover`] reconstruct the signing public key without it being
//!   transmitted alongside the signature.
//! - Public keys are 65 bytes: uncompressed SEC1 (`0x04 || x || y`).
//!   [`verify`] also accepts the 33-byte compressed encoding.
//!
//! ## Security Invariant
//!
//! - Private keys are never serialized or logged. [`KeyPair`] does not
//!   implement `Serialize`, and its `Debug` impl redacts the secret.
//! - All operations digest the payload with SHA-256 before touching the
//!   curve, so callers sign arbitrary-length byte strings.
//!
//! ## Serde
//!
//! Signatures serialize/deserialize as hex-encoded strings.

use secp256k1::ecdsa::{RecoverableSignature, RecoveryId};
use secp256k1::{Message, PublicKey, Secp256k1, SecretKey};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use signet_core::{Address, CryptoError};

/// Byte length of a recoverable signature (64-byte compact + recovery id).
pub const SIGNATURE_LENGTH: usize = 65;

/// Byte length of an uncompressed SEC1 public key.
pub const PUBLIC_KEY_LENGTH: usize = 65;

/// A 65-byte recoverable ECDSA signature.
///
/// The final byte is the recovery id (0..=3). Serializes as a
/// hex-encoded string.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signature(pub [u8; SIGNATURE_LENGTH]);

/// A secp256k1 key pair for signing operations.
///
/// Does not implement `Serialize` — private keys must not be
/// accidentally serialized into logs, responses, or artifacts.
pub struct KeyPair {
    secret: SecretKey,
    public: PublicKey,
}

// ---------------------------------------------------------------------------
// Signature impls
// ---------------------------------------------------------------------------

impl Signature {
    /// Create a signature from raw 65 bytes.
    ///
    /// Fails if the recovery id byte is out of range.
    pub fn from_bytes(bytes: [u8; SIGNATURE_LENGTH]) -> Result<Self, CryptoError> {
        if bytes[64] > 3 {
            return Err(CryptoError::MalformedSignature(format!(
                "recovery id must be 0..=3, got {}",
                bytes[64]
            )));
        }
        Ok(Self(bytes))
    }

    /// Parse a signature from an arbitrary byte slice.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CryptoError> {
        let arr: [u8; SIGNATURE_LENGTH] = bytes.try_into().map_err(|_| {
            CryptoError::MalformedSignature(format!(
                "signature must be {SIGNATURE_LENGTH} bytes, got {}",
                bytes.len()
            ))
        })?;
        Self::from_bytes(arr)
    }

    /// Return the raw 65-byte signature.
    pub fn as_bytes(&self) -> &[u8; SIGNATURE_LENGTH] {
        &self.0
    }

    /// The compact `r || s` portion without the recovery id.
    pub fn compact(&self) -> &[u8] {
        &self.0[..64]
    }

    /// The recovery id byte.
    pub fn recovery_id(&self) -> u8 {
        self.0[64]
    }

    /// Render the signature as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Parse a signature from a 130-character hex string.
    pub fn from_hex(hex: &str) -> Result<Self, CryptoError> {
        let hex = hex.trim().to_lowercase();
        if hex.len() != SIGNATURE_LENGTH * 2 {
            return Err(CryptoError::MalformedSignature(format!(
                "signature hex must be {} chars, got {}",
                SIGNATURE_LENGTH * 2,
                hex.len()
            )));
        }
        let bytes = hex_to_bytes(&hex).map_err(CryptoError::MalformedSignature)?;
        let mut arr = [0u8; SIGNATURE_LENGTH];
        arr.copy_from_slice(&bytes);
        Self::from_bytes(arr)
    }
}

impl Serialize for Signature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Signature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Debug for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix: String = self.0.iter().take(4).map(|b| format!("{b:02x}")).collect();
        write!(f, "Signature({prefix}...)")
    }
}

impl std::fmt::Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// ---------------------------------------------------------------------------
// KeyPair impls
// ---------------------------------------------------------------------------

impl KeyPair {
    /// Generate a new random key pair using the OS CSPRNG.
    pub fn generate() -> Self {
        use rand::RngCore;

        let mut csprng = rand::rngs::OsRng;
        // Rejection-sample until the bytes form a valid scalar; the
        // failure probability per draw is below 2^-127.
        loop {
            let mut bytes = [0u8; 32];
            csprng.fill_bytes(&mut bytes);
            if let Ok(secret) = SecretKey::from_byte_array(bytes) {
                let public = PublicKey::from_secret_key(&Secp256k1::new(), &secret);
                return Self { secret, public };
            }
        }
    }

    /// Create a key pair from raw 32-byte secret key material.
    pub fn from_secret_bytes(bytes: [u8; 32]) -> Result<Self, CryptoError> {
        let secret = SecretKey::from_byte_array(bytes)
            .map_err(|e| CryptoError::InvalidSecretKey(e.to_string()))?;
        let public = PublicKey::from_secret_key(&Secp256k1::new(), &secret);
        Ok(Self { secret, public })
    }

    /// Return the uncompressed 65-byte public key.
    pub fn public_key(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        self.public.serialize_uncompressed()
    }

    /// Export the raw 32-byte secret key.
    ///
    /// The caller is responsible for keeping the result off logs and
    /// disk; nothing else in the stack ever serializes it.
    pub fn secret_bytes(&self) -> [u8; 32] {
        self.secret.secret_bytes()
    }

    /// Derive the address for this key pair's public key.
    pub fn address(&self) -> Address {
        address_from_uncompressed(&self.public_key())
    }

    /// Produce a recoverable signature over the SHA-256 digest of `data`.
    pub fn sign(&self, data: &[u8]) -> Signature {
        let secp = Secp256k1::new();
        let msg = digest_message(data);
        let rec_sig = secp.sign_ecdsa_recoverable(msg, &self.secret);
        let (rec_id, compact) = rec_sig.serialize_compact();

        let mut bytes = [0u8; SIGNATURE_LENGTH];
        bytes[..64].copy_from_slice(&compact);
        bytes[64] = i32::from(rec_id) as u8;
        Signature(bytes)
    }
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "KeyPair(<secret>, {})", self.address())
    }
}

impl Clone for KeyPair {
    fn clone(&self) -> Self {
        Self {
            secret: self.secret,
            public: self.public,
        }
    }
}

// ---------------------------------------------------------------------------
// Verification and recovery
// ---------------------------------------------------------------------------

/// Verify that `signature` is a valid signature over `data` for
/// `public_key`.
///
/// Accepts uncompressed (65-byte) or compressed (33-byte) public keys
/// and a 64- or 65-byte signature (the recovery id, if present, is not
/// needed for verification). Returns `Ok(false)` for a well-formed but
/// invalid signature and `Err` when either encoding is malformed.
pub fn verify(public_key: &[u8], data: &[u8], signature: &[u8]) -> Result<bool, CryptoError> {
    let pk = PublicKey::from_slice(public_key)
        .map_err(|e| CryptoError::InvalidPublicKey(e.to_string()))?;

    let compact = match signature.len() {
        64 => signature,
        SIGNATURE_LENGTH => &signature[..64],
        n => {
            return Err(CryptoError::MalformedSignature(format!(
                "signature must be 64 or {SIGNATURE_LENGTH} bytes, got {n}"
            )))
        }
    };
    let sig = secp256k1::ecdsa::Signature::from_compact(compact)
        .map_err(|e| CryptoError::MalformedSignature(e.to_string()))?;

    let secp = Secp256k1::verification_only();
    Ok(secp.verify_ecdsa(digest_message(data), &sig, &pk).is_ok())
}

/// Recover the uncompressed public key that could have produced
/// `signature` over `data`.
///
/// The recovered key is **not** proof that `data` came from a specific
/// known identity: a signature alone cannot exclude other key pairs
/// consistent with the recovery output. This is a property of ECDSA
/// recovery, not a defect — callers that need identity assurance must
/// compare the result against a key they already trust.
pub fn recover(data: &[u8], signature: &[u8]) -> Result<[u8; PUBLIC_KEY_LENGTH], CryptoError> {
    let sig = Signature::from_slice(signature)?;
    let rec_id = RecoveryId::try_from(i32::from(sig.recovery_id()))
        .map_err(|e| CryptoError::MalformedSignature(e.to_string()))?;
    let rec_sig = RecoverableSignature::from_compact(sig.compact(), rec_id)
        .map_err(|e| CryptoError::MalformedSignature(e.to_string()))?;

    let secp = Secp256k1::new();
    let pk = secp
        .recover_ecdsa(digest_message(data), &rec_sig)
        .map_err(|e| CryptoError::RecoveryFailed(e.to_string()))?;
    Ok(pk.serialize_uncompressed())
}

/// Derive the address for a public key in either SEC1 encoding.
///
/// The address is the last 20 bytes of the SHA-256 digest of the
/// uncompressed public key.
pub fn address_from_public_key(public_key: &[u8]) -> Result<Address, CryptoError> {
    let pk = PublicKey::from_slice(public_key)
        .map_err(|e| CryptoError::InvalidPublicKey(e.to_string()))?;
    Ok(address_from_uncompressed(&pk.serialize_uncompressed()))
}

fn address_from_uncompressed(uncompressed: &[u8; PUBLIC_KEY_LENGTH]) -> Address {
    let digest = crate::sha256::sha256(uncompressed);
    let mut bytes = [0u8; 20];
    bytes.copy_from_slice(&digest[12..]);
    Address::from_bytes(bytes)
}

fn digest_message(data: &[u8]) -> Message {
    Message::from_digest(crate::sha256::sha256(data))
}

// ---------------------------------------------------------------------------
// Hex utilities (no external hex crate dependency)
// ---------------------------------------------------------------------------

fn hex_to_bytes(hex: &str) -> Result<Vec<u8>, String> {
    // Length checks count bytes, so slicing below must not land inside
    // a multi-byte character.
    if !hex.is_ascii() {
        return Err("hex string must be ascii".to_string());
    }
    (0..hex.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|e| format!("invalid hex at position {i}: {e}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keypair_generation() {
        let kp = KeyPair::generate();
        let pk = kp.public_key();
        assert_eq!(pk.len(), PUBLIC_KEY_LENGTH);
        assert_eq!(pk[0], 0x04); // uncompressed SEC1 tag
    }

    #[test]
    fn test_sign_and_verify() {
        let kp = KeyPair::generate();
        let sig = kp.sign(b"hello signet");
        assert!(verify(&kp.public_key(), b"hello signet", sig.as_bytes()).unwrap());
    }

    #[test]
    fn test_verify_tampered_data_fails() {
        let kp = KeyPair::generate();
        let sig = kp.sign(b"original");
        assert!(!verify(&kp.public_key(), b"tampered", sig.as_bytes()).unwrap());
    }

    #[test]
    fn test_verify_wrong_key_fails() {
        let kp1 = KeyPair::generate();
        let kp2 = KeyPair::generate();
        let sig = kp1.sign(b"payload");
        assert!(!verify(&kp2.public_key(), b"payload", sig.as_bytes()).unwrap());
    }

    #[test]
    fn test_verify_accepts_compact_signature() {
        let kp = KeyPair::generate();
        let sig = kp.sign(b"payload");
        assert!(verify(&kp.public_key(), b"payload", sig.compact()).unwrap());
    }

    #[test]
    fn test_verify_malformed_public_key() {
        let kp = KeyPair::generate();
        let sig = kp.sign(b"payload");
        let result = verify(&[0u8; 65], b"payload", sig.as_bytes());
        assert!(matches!(result, Err(CryptoError::InvalidPublicKey(_))));
    }

    #[test]
    fn test_verify_malformed_signature_length() {
        let kp = KeyPair::generate();
        let result = verify(&kp.public_key(), b"payload", &[0u8; 10]);
        assert!(matches!(result, Err(CryptoError::MalformedSignature(_))));
    }

    #[test]
    fn test_recover_returns_signing_key() {
        let kp = KeyPair::generate();
        let sig = kp.sign(b"recover me");
        let recovered = recover(b"recover me", sig.as_bytes()).unwrap();
        assert_eq!(recovered, kp.public_key());
    }

    #[test]
    fn test_recover_different_data_different_key() {
        let kp = KeyPair::generate();
        let sig = kp.sign(b"signed data");
        // Recovery over different data yields *some* key (or an error),
        // but not the original signer's.
        if let Ok(recovered) = recover(b"other data", sig.as_bytes()) {
            assert_ne!(recovered, kp.public_key());
        }
    }

    #[test]
    fn test_recover_rejects_short_signature() {
        let result = recover(b"data", &[0u8; 64]);
        assert!(matches!(result, Err(CryptoError::MalformedSignature(_))));
    }

    #[test]
    fn test_recover_rejects_bad_recovery_id() {
        let mut bytes = [1u8; SIGNATURE_LENGTH];
        bytes[64] = 9;
        let result = recover(b"data", &bytes);
        assert!(matches!(result, Err(CryptoError::MalformedSignature(_))));
    }

    #[test]
    fn test_deterministic_from_secret_bytes() {
        let seed = [42u8; 32];
        let kp1 = KeyPair::from_secret_bytes(seed).unwrap();
        let kp2 = KeyPair::from_secret_bytes(seed).unwrap();
        assert_eq!(kp1.public_key(), kp2.public_key());
        assert_eq!(kp1.address(), kp2.address());
        assert_eq!(kp1.sign(b"x"), kp2.sign(b"x"));
    }

    #[test]
    fn test_from_secret_bytes_rejects_zero() {
        assert!(matches!(
            KeyPair::from_secret_bytes([0u8; 32]),
            Err(CryptoError::InvalidSecretKey(_))
        ));
    }

    #[test]
    fn test_address_from_public_key_matches_keypair() {
        let kp = KeyPair::generate();
        let addr = address_from_public_key(&kp.public_key()).unwrap();
        assert_eq!(addr, kp.address());
    }

    #[test]
    fn test_address_from_compressed_key_matches() {
        let kp = KeyPair::generate();
        let compressed = PublicKey::from_slice(&kp.public_key())
            .unwrap()
            .serialize();
        let addr = address_from_public_key(&compressed).unwrap();
        assert_eq!(addr, kp.address());
    }

    #[test]
    fn test_signature_hex_roundtrip() {
        let kp = KeyPair::generate();
        let sig = kp.sign(b"roundtrip");
        let hex = sig.to_hex();
        assert_eq!(hex.len(), 130);
        let parsed = Signature::from_hex(&hex).unwrap();
        assert_eq!(sig, parsed);
        assert_eq!(sig.recovery_id(), parsed.recovery_id());
    }

    #[test]
    fn test_signature_serde_json_roundtrip() {
        let kp = KeyPair::generate();
        let sig = kp.sign(b"serde");
        let json = serde_json::to_string(&sig).unwrap();
        assert!(json.starts_with('"'));
        assert_eq!(json.len(), 130 + 2); // 130 hex chars + 2 quotes

        let parsed: Signature = serde_json::from_str(&json).unwrap();
        assert_eq!(sig, parsed);
    }

    #[test]
    fn test_signature_from_hex_multibyte_utf8_is_error_not_panic() {
        // 43 three-byte chars + 1 ascii char = 130 bytes, passing the
        // length check while containing no slicable hex pairs.
        let bad = "€".repeat(43) + "a";
        assert_eq!(bad.len(), SIGNATURE_LENGTH * 2);
        assert!(matches!(
            Signature::from_hex(&bad),
            Err(CryptoError::MalformedSignature(_))
        ));
    }

    #[test]
    fn test_signature_from_bytes_rejects_bad_recovery_id() {
        let mut bytes = [0u8; SIGNATURE_LENGTH];
        bytes[64] = 4;
        assert!(Signature::from_bytes(bytes).is_err());
    }

    #[test]
    fn test_secret_bytes_roundtrip() {
        let kp = KeyPair::generate();
        let restored = KeyPair::from_secret_bytes(kp.secret_bytes()).unwrap();
        assert_eq!(kp.public_key(), restored.public_key());
    }

    #[test]
    fn test_debug_does_not_leak_secret_key() {
        let kp = KeyPair::from_secret_bytes([7u8; 32]).unwrap();
        let debug = format!("{kp:?}");
        assert!(debug.starts_with("KeyPair(<secret>"));
        assert!(!debug.contains("07070707"));
    }
}
