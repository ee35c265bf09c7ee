//! # Backend Abstraction
//!
//! Abstracts key storage and signing behind a trait so the wallet can
//! dispatch over a heterogeneous, extensible set of providers:
//! in-memory keystores, hardware tokens, remote signers. The registry
//! only ever observes addresses through these capabilities — it holds
//! no independent copy of address state.
//!
//! ## Kind Identifiers
//!
//! Backends are grouped by an explicit [`BackendKind`] supplied by the
//! implementation itself. The identifier must be deterministic per
//! implementation and stable for the registry's lifetime; the registry
//! keys its internal grouping on it rather than inspecting runtime type
//! information.

use signet_core::{Address, WalletError};
use signet_crypto::Signature;

/// Stable classification of a backend implementation.
///
/// Each `Backend` implementation reports one kind for all its
/// instances, e.g. `BackendKind("memory")`. Used to group backends at
/// registration and retrieve them by category later.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct BackendKind(pub &'static str);

impl BackendKind {
    /// The identifier string.
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// Capability set implemented by every key-storage provider.
///
/// Implementations must be `Send + Sync`: the wallet hands out shared
/// references across threads and invokes `sign` outside its own lock.
/// Constructed and owned externally, registered once at wallet
/// construction, never removed during the wallet's lifetime.
pub trait Backend: Send + Sync {
    /// The stable kind identifier for this implementation.
    fn kind(&self) -> BackendKind;

    /// Whether this backend currently holds the key for `address`.
    fn has_address(&self, address: &Address) -> bool;

    /// All addresses this backend currently holds.
    fn addresses(&self) -> Vec<Address>;

    /// Produce a signature over `data` with the key for `address`.
    fn sign(&self, address: &Address, data: &[u8]) -> Result<Signature, WalletError>;
}
