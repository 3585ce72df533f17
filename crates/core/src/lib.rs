//! NestEgg Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for NestEgg: funding
//! accounts, savings goals, cash transactions, transfers, categories,
//! and user settings. It is storage-agnostic and defines repository
//! traits that are implemented by the `storage-rest` crate.

pub mod accounts;
pub mod categories;
pub mod constants;
pub mod errors;
pub mod goal_transactions;
pub mod goals;
pub mod identity;
pub mod provisioning;
pub mod settings;
pub mod transactions;
pub mod transfers;

#[cfg(test)]
pub(crate) mod test_mocks;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
