//! Savings goal domain models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Domain model representing a named savings target.
///
/// `current_amount` starts at `initial_amount` and moves only through goal
/// transactions. It is not clamped to `[0, target_amount]`: overshoot and
/// negative values are permitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoal {
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

/// Input model for creating a new savings goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSavingsGoal {
    pub name: String,
    pub target_amount: Decimal,
    /// Starting amount already saved toward the goal; defaults to zero.
    #[serde(default)]
    pub initial_amount: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub image_url: Option<String>,
}

impl NewSavingsGoal {
    /// Validates the new goal data.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Goal name cannot be empty".to_string(),
            )));
        }
        if self.target_amount <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Target amount must be positive".to_string(),
            )));
        }
        if self.end_date < self.start_date {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Goal end date cannot be before its start date".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for updating an existing savings goal.
///
/// `current_amount` is deliberately absent: it only moves through goal
/// transactions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoalUpdate {
    pub id: String,
    pub name: String,
    pub target_amount: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub image_url: Option<String>,
}

impl SavingsGoalUpdate {
    /// Validates the goal update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "id".to_string(),
            )));
        }
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Goal name cannot be empty".to_string(),
            )));
        }
        if self.target_amount <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Target amount must be positive".to_string(),
            )));
        }
        if self.end_date < self.start_date {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Goal end date cannot be before its start date".to_string(),
            )));
        }
        Ok(())
    }
}
