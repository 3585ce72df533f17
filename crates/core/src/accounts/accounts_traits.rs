//! Funding account repository and service traits.
//!
//! These traits define the contract for account operations without any
//! storage-specific types, allowing for different ledger store
//! implementations.

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::accounts_model::{FundingAccount, FundingAccountUpdate, NewFundingAccount};
use crate::errors::Result;

/// Trait defining the contract for funding account repository operations.
///
/// Every method takes the owning `user_id` and filters on it; a row belonging
/// to another user behaves exactly like a missing row. The store offers no
/// multi-row transactions, so the only atomic primitive beyond single-row
/// CRUD is [`adjust_balance`](AccountRepositoryTrait::adjust_balance).
#[async_trait]
pub trait AccountRepositoryTrait: Send + Sync {
    /// Creates a new account owned by `user_id`.
    async fn create(&self, user_id: &str, new_account: NewFundingAccount)
        -> Result<FundingAccount>;

    /// Updates an existing account's mutable fields (name).
    async fn update(&self, user_id: &str, update: FundingAccountUpdate) -> Result<FundingAccount>;

    /// Deletes an account by its ID. Returns the number of deleted rows.
    async fn delete(&self, user_id: &str, account_id: &str) -> Result<usize>;

    /// Retrieves an account by its ID.
    async fn get_by_id(&self, user_id: &str, account_id: &str) -> Result<FundingAccount>;

    /// Lists all accounts owned by `user_id`.
    async fn list(&self, user_id: &str) -> Result<Vec<FundingAccount>>;

    /// Applies `delta` to the account balance as a store-native atomic
    /// increment and returns the updated row.
    ///
    /// The store computes `balance = balance + delta` server-side, so two
    /// concurrent adjustments never read a stale balance from each other.
    /// Fails with `NotFound` if the account does not exist for this user.
    async fn adjust_balance(
        &self,
        user_id: &str,
        account_id: &str,
        delta: Decimal,
    ) -> Result<FundingAccount>;
}

/// Trait defining the contract for funding account service operations.
#[async_trait]
pub trait AccountServiceTrait: Send + Sync {
    /// Creates a new account with business validation.
    async fn create_account(
        &self,
        user_id: &str,
        new_account: NewFundingAccount,
    ) -> Result<FundingAccount>;

    /// Updates an existing account with business validation.
    async fn update_account(
        &self,
        user_id: &str,
        update: FundingAccountUpdate,
    ) -> Result<FundingAccount>;

    /// Deletes an account, refusing while transactions still reference it.
    async fn delete_account(&self, user_id: &str, account_id: &str) -> Result<()>;

    /// Retrieves an account by ID.
    async fn get_account(&self, user_id: &str, account_id: &str) -> Result<FundingAccount>;

    /// Lists all accounts owned by the user.
    async fn list_accounts(&self, user_id: &str) -> Result<Vec<FundingAccount>>;
}
