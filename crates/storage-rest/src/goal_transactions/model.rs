//! Row models for the `goal_transactions` table.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use nestegg_core::goal_transactions::{GoalTransaction, GoalTransactionKind, NewGoalTransaction};

/// A stored `goal_transactions` row. `goal_id` is NULL on transfer log rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalTransactionRow {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub goal_id: Option<String>,
    pub account_id: String,
    pub amount: Decimal,
    pub kind: GoalTransactionKind,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for `goal_transactions`.
#[derive(Debug, Clone, Serialize)]
pub struct NewGoalTransactionRow {
    pub id: String,
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_id: Option<String>,
    pub account_id: String,
    pub amount: Decimal,
    pub kind: GoalTransactionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<GoalTransactionRow> for GoalTransaction {
    fn from(row: GoalTransactionRow) -> Self {
        Self {
            id: row.id,
            goal_id: row.goal_id,
            account_id: row.account_id,
            amount: row.amount,
            kind: row.kind,
            description: row.description,
            created_at: row.created_at,
        }
    }
}

impl NewGoalTransactionRow {
    pub fn from_new(user_id: &str, new_tx: NewGoalTransaction) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            goal_id: new_tx.goal_id,
            account_id: new_tx.account_id,
            amount: new_tx.amount,
            kind: new_tx.kind,
            description: new_tx.description,
        }
    }
}
