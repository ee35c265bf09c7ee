//! # signet-core — Foundational Types for the Signet Stack
//!
//! This crate is the bedrock of the Signet key-custody stack. It defines
//! the `Address` identifier and the error hierarchy every other crate in
//! the workspace builds on; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrapper for the address primitive.** An [`Address`] is an
//!    opaque, comparable identifier for a key pair — never a bare string
//!    or byte slice. The registry layer observes addresses; it never
//!    derives or interprets them.
//!
//! 2. **Structured errors.** All failures are explicit `Result` values
//!    with `thiserror`-derived types. An unknown address is a
//!    distinguishable, recoverable condition callers can branch on —
//!    not a stringly-typed failure.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `signet-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod address;
pub mod error;

pub use address::Address;
pub use error::{AddressError, CryptoError, WalletError};
