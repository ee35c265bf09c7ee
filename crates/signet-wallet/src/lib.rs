//! # signet-wallet — Key-Custody Registry and Dispatch Facade
//!
//! Tracks which cryptographic addresses are available, routes
//! address-scoped operations (existence checks, signing) to the storage
//! backend that owns each address, and exposes address-agnostic
//! verification and public-key-recovery operations.
//!
//! The [`Wallet`] is the single entry point: a higher-level signing or
//! account-management service asks it "do I control this address?" and
//! "sign this payload with that address's key" without knowing how or
//! where keys are actually stored.
//!
//! ## Architecture
//!
//! - [`Backend`] — the capability set implemented by each key-storage
//!   provider (in-memory keystore, hardware token, remote signer, ...).
//! - [`BackendKind`] — stable classification identifier used to group
//!   and retrieve backends by category.
//! - [`Wallet`] — registry plus facade: groups backends by kind at
//!   construction, resolves addresses to owning backends, and dispatches
//!   signing. One coarse mutex guards the group map.
//! - [`MemoryBackend`] — in-process keystore backend, the reference
//!   `Backend` implementation.
//!
//! ## Crate Policy
//!
//! - No key persistence, no authorization policy, no ordering guarantee
//!   for aggregated addresses.
//! - Errors are returned to the caller, never logged-and-swallowed.

pub mod backend;
pub mod memory;
pub mod wallet;

pub use backend::{Backend, BackendKind};
pub use memory::MemoryBackend;
pub use wallet::Wallet;
