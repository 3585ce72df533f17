//! Goal transaction repository and service traits.

use async_trait::async_trait;

use super::goal_transactions_model::{GoalTransaction, NewGoalTransaction};
use crate::errors::Result;

/// Trait for goal transaction repository operations.
///
/// Rows carry no `user_id` of their own; implementations resolve ownership
/// through the referenced account and treat other users' rows as missing.
#[async_trait]
pub trait GoalTransactionRepositoryTrait: Send + Sync {
    async fn insert(&self, user_id: &str, new_tx: NewGoalTransaction) -> Result<GoalTransaction>;
    async fn get_by_id(&self, user_id: &str, tx_id: &str) -> Result<GoalTransaction>;
    async fn list_for_goal(&self, user_id: &str, goal_id: &str) -> Result<Vec<GoalTransaction>>;
    async fn list_for_account(
        &self,
        user_id: &str,
        account_id: &str,
    ) -> Result<Vec<GoalTransaction>>;
    async fn delete(&self, user_id: &str, tx_id: &str) -> Result<usize>;
}

/// Trait for goal transaction service operations (deposit/withdrawal
/// protocol).
#[async_trait]
pub trait GoalTransactionServiceTrait: Send + Sync {
    /// Executes a deposit or withdrawal against a goal.
    async fn create_goal_transaction(
        &self,
        user_id: &str,
        new_tx: NewGoalTransaction,
    ) -> Result<GoalTransaction>;

    /// Lists the transactions of one goal, newest first.
    async fn list_goal_transactions(
        &self,
        user_id: &str,
        goal_id: &str,
    ) -> Result<Vec<GoalTransaction>>;

    /// Reverses a deposit/withdrawal and removes its row.
    async fn delete_goal_transaction(&self, user_id: &str, tx_id: &str) -> Result<()>;
}
