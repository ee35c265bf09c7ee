//! # Wallet — Backend Registry and Dispatch Facade
//!
//! The [`Wallet`] owns the backend-group mapping exclusively. The map is
//! populated once at construction and only read thereafter; a single
//! coarse `parking_lot::Mutex` covers every access. `parking_lot` is
//! non-poisonable, so a panicking caller cannot wedge the registry.
//!
//! `sign` resolves the owning backend under the lock (via [`Wallet::find`])
//! and then invokes the backend outside it, so a slow or blocking signer
//! cannot starve other registry queries.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use signet_core::{Address, CryptoError, WalletError};
use signet_crypto::Signature;

use crate::backend::{Backend, BackendKind};

/// Thread-safe key-custody registry and dispatch facade.
///
/// Groups registered backends by [`BackendKind`], resolves addresses to
/// the backend that holds them, and dispatches signing. Verification
/// and recovery are address-independent and bypass the registry.
pub struct Wallet {
    backends: Mutex<HashMap<BackendKind, Vec<Arc<dyn Backend>>>>,
}

impl Wallet {
    /// Construct a wallet managing addresses in all the passed-in
    /// backends.
    ///
    /// Backends are grouped by their reported kind, preserving
    /// registration order within each kind. Duplicates are stored and
    /// queried exactly as given; the registry does not deduplicate.
    /// There is no unregister operation — the set is fixed for the
    /// wallet's lifetime.
    pub fn new(backends: impl IntoIterator<Item = Arc<dyn Backend>>) -> Self {
        let mut grouped: HashMap<BackendKind, Vec<Arc<dyn Backend>>> = HashMap::new();
        for backend in backends {
            grouped.entry(backend.kind()).or_default().push(backend);
        }

        for (kind, group) in &grouped {
            tracing::debug!(kind = %kind, backends = group.len(), "registered backend group");
        }

        Self {
            backends: Mutex::new(grouped),
        }
    }

    /// Check whether the given address is held by any backend.
    ///
    /// Safe for concurrent access. Never fails: an unknown address is
    /// simply `false`.
    pub fn has_address(&self, address: &Address) -> bool {
        self.find(address).is_ok()
    }

    /// Search all backends and return the one holding the passed-in
    /// address.
    ///
    /// Safe for concurrent access; the whole registry is locked for the
    /// duration of the scan, so concurrent calls observe a consistent
    /// snapshot. Group order is unspecified but stable for a given
    /// wallet; within a group, registration order applies. If more than
    /// one backend claims the address (a caller configuration error,
    /// not validated here), the first encountered wins.
    pub fn find(&self, address: &Address) -> Result<Arc<dyn Backend>, WalletError> {
        let backends = self.backends.lock();

        for group in backends.values() {
            for backend in group {
                if backend.has_address(address) {
                    return Ok(Arc::clone(backend));
                }
            }
        }

        Err(WalletError::UnknownAddress(*address))
    }

    /// Retrieve all addresses held across every backend.
    ///
    /// Safe for concurrent access. The result is an unordered multiset:
    /// ordering may differ between calls on the same wallet, and an
    /// address held by several backends appears once per holder. Callers
    /// must not depend on positional stability.
    pub fn addresses(&self) -> Vec<Address> {
        let backends = self.backends.lock();

        let mut out = Vec::new();
        for group in backends.values() {
            for backend in group {
                out.extend(backend.addresses());
            }
        }

        out
    }

    /// Return the backends registered under `kind`.
    ///
    /// The returned vector is a defensive copy in registration order;
    /// mutating it never affects the registry. An unregistered kind
    /// yields an empty vector, not a failure.
    pub fn backends_of_kind(&self, kind: BackendKind) -> Vec<Arc<dyn Backend>> {
        let backends = self.backends.lock();
        backends.get(&kind).cloned().unwrap_or_default()
    }

    /// Sign `data` with the key for `address`.
    ///
    /// Resolves the owning backend via [`Wallet::find`] — the only point
    /// at which the registry lock is taken — then invokes the backend's
    /// sign capability outside the lock and returns its result verbatim.
    /// An unknown address surfaces as [`WalletError::UnknownAddress`],
    /// unmodified in kind so callers can branch on it.
    pub fn sign(&self, address: &Address, data: &[u8]) -> Result<Signature, WalletError> {
        let backend = match self.find(address) {
            Ok(backend) => backend,
            Err(err) => {
                tracing::debug!(address = %address, "sign attempted for unknown address");
                return Err(err);
            }
        };
        backend.sign(address, data)
    }

    /// Verify that `signature` is valid over `data` for `public_key`.
    ///
    /// Stateless and address-independent; delegates to the secp256k1
    /// primitive without touching the registry.
    pub fn verify(
        &self,
        public_key: &[u8],
        data: &[u8],
        signature: &[u8],
    ) -> Result<bool, CryptoError> {
        signet_crypto::verify(public_key, data, signature)
    }

    /// Recover the uncompressed public key that could have produced
    /// `signature` over `data`.
    ///
    /// The recovered key should not be taken as proof that `data` came
    /// from a specific known identity — a signature alone cannot exclude
    /// other key pairs consistent with the recovery output. See
    /// [`signet_crypto::recover`].
    pub fn recover(&self, data: &[u8], signature: &[u8]) -> Result<[u8; 65], CryptoError> {
        signet_crypto::recover(data, signature)
    }
}

impl std::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let backends = self.backends.lock();
        let groups: Vec<String> = backends
            .iter()
            .map(|(kind, group)| format!("{kind}:{}", group.len()))
            .collect();
        f.debug_struct("Wallet").field("backends", &groups).finish()
    }
}
