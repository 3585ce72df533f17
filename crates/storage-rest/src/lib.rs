//! NestEgg Storage (REST) - Hosted row-store implementation.
//!
//! This crate implements the repository traits defined in `nestegg-core`
//! against a hosted PostgREST-style row store, plus the identity provider
//! that verifies the hosted auth service's access tokens. All transport
//! errors are converted to the core's storage-agnostic error types before
//! they leave this crate.

pub mod accounts;
pub mod categories;
pub mod client;
pub mod errors;
pub mod goal_transactions;
pub mod goals;
pub mod identity;
pub mod settings;
pub mod transactions;

pub use client::RestLedgerClient;
pub use errors::StorageError;
pub use identity::{decode_signing_secret, JwtIdentityProvider};
