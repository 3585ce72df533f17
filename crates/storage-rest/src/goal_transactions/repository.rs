use std::sync::Arc;

use async_trait::async_trait;

use nestegg_core::goal_transactions::{
    GoalTransaction, GoalTransactionRepositoryTrait, NewGoalTransaction,
};
use nestegg_core::Result;

use super::model::{GoalTransactionRow, NewGoalTransactionRow};
use crate::client::{Filter, RestLedgerClient};
use crate::errors::map_missing;

const TABLE: &str = "goal_transactions";

pub struct GoalTransactionRepository {
    client: Arc<RestLedgerClient>,
}

impl GoalTransactionRepository {
    pub fn new(client: Arc<RestLedgerClient>) -> Self {
        GoalTransactionRepository { client }
    }

    fn owner(user_id: &str) -> Filter {
        Filter::eq("user_id", user_id)
    }
}

#[async_trait]
impl GoalTransactionRepositoryTrait for GoalTransactionRepository {
    async fn insert(&self, user_id: &str, new_tx: NewGoalTransaction) -> Result<GoalTransaction> {
        let row: GoalTransactionRow = self
            .client
            .insert(TABLE, &NewGoalTransactionRow::from_new(user_id, new_tx))
            .await?;
        Ok(row.into())
    }

    async fn get_by_id(&self, user_id: &str, tx_id: &str) -> Result<GoalTransaction> {
        let row: GoalTransactionRow = self
            .client
            .select_one(TABLE, &[Self::owner(user_id), Filter::eq("id", tx_id)])
            .await
            .map_err(|e| map_missing(e, || format!("Goal transaction {tx_id}")))?;
        Ok(row.into())
    }

    async fn list_for_goal(&self, user_id: &str, goal_id: &str) -> Result<Vec<GoalTransaction>> {
        let rows: Vec<GoalTransactionRow> = self
            .client
            .select(
                TABLE,
                &[Self::owner(user_id), Filter::eq("goal_id", goal_id)],
                Some("created_at.desc"),
            )
            .await?;
        Ok(rows.into_iter().map(GoalTransaction::from).collect())
    }

    async fn list_for_account(
        &self,
        user_id: &str,
        account_id: &str,
    ) -> Result<Vec<GoalTransaction>> {
        let rows: Vec<GoalTransactionRow> = self
            .client
            .select(
                TABLE,
                &[Self::owner(user_id), Filter::eq("account_id", account_id)],
                Some("created_at.desc"),
            )
            .await?;
        Ok(rows.into_iter().map(GoalTransaction::from).collect())
    }

    async fn delete(&self, user_id: &str, tx_id: &str) -> Result<usize> {
        self.client
            .delete(TABLE, &[Self::owner(user_id), Filter::eq("id", tx_id)])
            .await
    }
}
