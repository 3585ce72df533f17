use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde_json::json;

use nestegg_core::goals::{GoalRepositoryTrait, NewSavingsGoal, SavingsGoal, SavingsGoalUpdate};
use nestegg_core::Result;

use super::model::{NewSavingsGoalRow, SavingsGoalRow};
use crate::client::{Filter, RestLedgerClient};
use crate::errors::map_missing;

const TABLE: &str = "savings_goals";

pub struct GoalRepository {
    client: Arc<RestLedgerClient>,
}

impl GoalRepository {
    pub fn new(client: Arc<RestLedgerClient>) -> Self {
        GoalRepository { client }
    }

    fn owner(user_id: &str) -> Filter {
        Filter::eq("user_id", user_id)
    }
}

#[async_trait]
impl GoalRepositoryTrait for GoalRepository {
    async fn create(&self, user_id: &str, new_goal: NewSavingsGoal) -> Result<SavingsGoal> {
        let row: SavingsGoalRow = self
            .client
            .insert(TABLE, &NewSavingsGoalRow::from_new(user_id, new_goal))
            .await?;
        Ok(row.into())
    }

    async fn update(&self, user_id: &str, update: SavingsGoalUpdate) -> Result<SavingsGoal> {
        let row: SavingsGoalRow = self
            .client
            .update_one(
                TABLE,
                &[Self::owner(user_id), Filter::eq("id", &update.id)],
                &json!({
                    "name": update.name,
                    "target_amount": update.target_amount,
                    "start_date": update.start_date,
                    "end_date": update.end_date,
                    "image_url": update.image_url,
                }),
            )
            .await
            .map_err(|e| map_missing(e, || format!("Goal {}", update.id)))?;
        Ok(row.into())
    }

    async fn delete(&self, user_id: &str, goal_id: &str) -> Result<usize> {
        self.client
            .delete(TABLE, &[Self::owner(user_id), Filter::eq("id", goal_id)])
            .await
    }

    async fn get_by_id(&self, user_id: &str, goal_id: &str) -> Result<SavingsGoal> {
        let row: SavingsGoalRow = self
            .client
            .select_one(TABLE, &[Self::owner(user_id), Filter::eq("id", goal_id)])
            .await
            .map_err(|e| map_missing(e, || format!("Goal {goal_id}")))?;
        Ok(row.into())
    }

    async fn list(&self, user_id: &str) -> Result<Vec<SavingsGoal>> {
        let rows: Vec<SavingsGoalRow> = self
            .client
            .select(TABLE, &[Self::owner(user_id)], Some("created_at.asc"))
            .await?;
        Ok(rows.into_iter().map(SavingsGoal::from).collect())
    }

    async fn adjust_current_amount(
        &self,
        user_id: &str,
        goal_id: &str,
        delta: Decimal,
    ) -> Result<SavingsGoal> {
        let row: SavingsGoalRow = self
            .client
            .rpc(
                "adjust_goal_amount",
                &json!({
                    "p_user_id": user_id,
                    "p_goal_id": goal_id,
                    "p_delta": delta,
                }),
            )
            .await
            .map_err(|e| map_missing(e, || format!("Goal {goal_id}")))?;
        Ok(row.into())
    }
}
