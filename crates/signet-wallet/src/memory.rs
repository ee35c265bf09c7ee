//! # In-Memory Keystore Backend
//!
//! The reference [`Backend`] implementation: key pairs live in process
//! memory behind a `parking_lot::RwLock`. Suitable for development,
//! testing, and short-lived tooling; anything that must survive a
//! restart belongs in a persistent backend.

use std::collections::HashMap;

use parking_lot::RwLock;

use signet_core::{Address, WalletError};
use signet_crypto::{KeyPair, Signature};

use crate::backend::{Backend, BackendKind};

/// Kind identifier reported by every [`MemoryBackend`] instance.
pub const MEMORY_BACKEND_KIND: BackendKind = BackendKind("memory");

/// In-process keystore holding secp256k1 key pairs.
///
/// The lock is `parking_lot`, not poisonable — a panicking writer does
/// not permanently corrupt the store.
pub struct MemoryBackend {
    keys: RwLock<HashMap<Address, KeyPair>>,
}

impl MemoryBackend {
    /// Create an empty keystore.
    pub fn new() -> Self {
        Self {
            keys: RwLock::new(HashMap::new()),
        }
    }

    /// Generate a fresh key pair and return its address.
    pub fn new_address(&self) -> Address {
        let keypair = KeyPair::generate();
        let address = keypair.address();
        self.keys.write().insert(address, keypair);
        address
    }

    /// Import an existing key pair, returning its address.
    ///
    /// Re-importing a key pair for an address already held replaces the
    /// stored pair; the derived address is identical either way.
    pub fn import(&self, keypair: KeyPair) -> Address {
        let address = keypair.address();
        self.keys.write().insert(address, keypair);
        address
    }

    /// Number of key pairs currently held.
    pub fn len(&self) -> usize {
        self.keys.read().len()
    }

    /// Whether the keystore holds no key pairs.
    pub fn is_empty(&self) -> bool {
        self.keys.read().is_empty()
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for MemoryBackend {
    fn kind(&self) -> BackendKind {
        MEMORY_BACKEND_KIND
    }

    fn has_address(&self, address: &Address) -> bool {
        self.keys.read().contains_key(address)
    }

    fn addresses(&self) -> Vec<Address> {
        self.keys.read().keys().copied().collect()
    }

    fn sign(&self, address: &Address, data: &[u8]) -> Result<Signature, WalletError> {
        // Clone the key pair out so the lock is not held while signing.
        let keypair = self
            .keys
            .read()
            .get(address)
            .cloned()
            .ok_or(WalletError::UnknownAddress(*address))?;
        Ok(keypair.sign(data))
    }
}

impl std::fmt::Debug for MemoryBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryBackend")
            .field("keys", &self.len())
            .finish()
    }
}
