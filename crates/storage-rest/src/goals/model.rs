//! Row models for the `savings_goals` table.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use nestegg_core::goals::{NewSavingsGoal, SavingsGoal};

/// A stored `savings_goals` row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsGoalRow {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub target_amount: Decimal,
    pub initial_amount: Decimal,
    pub current_amount: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload for `savings_goals`.
///
/// A new goal starts with `current_amount` equal to its `initial_amount`.
#[derive(Debug, Clone, Serialize)]
pub struct NewSavingsGoalRow {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub target_amount: Decimal,
    pub initial_amount: Decimal,
    pub current_amount: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl From<SavingsGoalRow> for SavingsGoal {
    fn from(row: SavingsGoalRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            name: row.name,
            target_amount: row.target_amount,
            initial_amount: row.initial_amount,
            current_amount: row.current_amount,
            start_date: row.start_date,
            end_date: row.end_date,
            image_url: row.image_url,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl NewSavingsGoalRow {
    pub fn from_new(user_id: &str, new_goal: NewSavingsGoal) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            name: new_goal.name,
            target_amount: new_goal.target_amount,
            initial_amount: new_goal.initial_amount,
            current_amount: new_goal.initial_amount,
            start_date: new_goal.start_date,
            end_date: new_goal.end_date,
            image_url: new_goal.image_url,
        }
    }
}
