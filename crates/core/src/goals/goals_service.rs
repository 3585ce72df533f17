use std::sync::Arc;

use super::goals_model::{NewSavingsGoal, SavingsGoal, SavingsGoalUpdate};
use super::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use crate::errors::{Error, Result};

/// Service for managing savings goals.
pub struct GoalService {
    repository: Arc<dyn GoalRepositoryTrait>,
}

impl GoalService {
    pub fn new(repository: Arc<dyn GoalRepositoryTrait>) -> Self {
        GoalService { repository }
    }
}

#[async_trait::async_trait]
impl GoalServiceTrait for GoalService {
    async fn create_goal(&self, user_id: &str, new_goal: NewSavingsGoal) -> Result<SavingsGoal> {
        new_goal.validate()?;
        self.repository.create(user_id, new_goal).await
    }

    async fn update_goal(&self, user_id: &str, update: SavingsGoalUpdate) -> Result<SavingsGoal> {
        update.validate()?;
        self.repository.update(user_id, update).await
    }

    async fn delete_goal(&self, user_id: &str, goal_id: &str) -> Result<()> {
        let deleted = self.repository.delete(user_id, goal_id).await?;
        if deleted == 0 {
            return Err(Error::NotFound(format!("Goal {goal_id}")));
        }
        Ok(())
    }

    async fn get_goal(&self, user_id: &str, goal_id: &str) -> Result<SavingsGoal> {
        self.repository.get_by_id(user_id, goal_id).await
    }

    async fn list_goals(&self, user_id: &str) -> Result<Vec<SavingsGoal>> {
        self.repository.list(user_id).await
    }
}
