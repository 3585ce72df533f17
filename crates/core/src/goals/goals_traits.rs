//! Savings goal repository and service traits.

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::goals_model::{NewSavingsGoal, SavingsGoal, SavingsGoalUpdate};
use crate::errors::Result;

/// Trait for savings goal repository operations.
///
/// All methods filter on `user_id`; rows owned by other users behave like
/// missing rows.
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    async fn create(&self, user_id: &str, new_goal: NewSavingsGoal) -> Result<SavingsGoal>;
    async fn update(&self, user_id: &str, update: SavingsGoalUpdate) -> Result<SavingsGoal>;
    async fn delete(&self, user_id: &str, goal_id: &str) -> Result<usize>;
    async fn get_by_id(&self, user_id: &str, goal_id: &str) -> Result<SavingsGoal>;
    async fn list(&self, user_id: &str) -> Result<Vec<SavingsGoal>>;

    /// Applies `delta` to `current_amount` as a store-native atomic increment
    /// and returns the updated row. No floor or ceiling is applied.
    async fn adjust_current_amount(
        &self,
        user_id: &str,
        goal_id: &str,
        delta: Decimal,
    ) -> Result<SavingsGoal>;
}

/// Trait for savings goal service operations.
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    async fn create_goal(&self, user_id: &str, new_goal: NewSavingsGoal) -> Result<SavingsGoal>;
    async fn update_goal(&self, user_id: &str, update: SavingsGoalUpdate) -> Result<SavingsGoal>;
    async fn delete_goal(&self, user_id: &str, goal_id: &str) -> Result<()>;
    async fn get_goal(&self, user_id: &str, goal_id: &str) -> Result<SavingsGoal>;
    async fn list_goals(&self, user_id: &str) -> Result<Vec<SavingsGoal>>;
}
