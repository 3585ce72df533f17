//! Goal transaction domain models.
//!
//! A goal transaction moves money between a funding account and a savings
//! goal's tracked amount, or records an account-to-account transfer
//! (`kind = Transfer`, `goal_id` absent).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Movement direction of a goal transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalTransactionKind {
    /// Money leaves the funding account into the goal.
    Deposit,
    /// Money returns from the goal to the funding account.
    Withdrawal,
    /// Log row for an account-to-account transfer; created only by the
    /// transfer operation.
    Transfer,
}

impl GoalTransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalTransactionKind::Deposit => "deposit",
            GoalTransactionKind::Withdrawal => "withdrawal",
            GoalTransactionKind::Transfer => "transfer",
        }
    }
}

/// Domain model for a goal transaction row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalTransaction {
    pub id: String,
    /// Absent for transfer log rows.
    pub goal_id: Option<String>,
    pub account_id: String,
    pub amount: Decimal,
    pub kind: GoalTransactionKind,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input model for creating a goal transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGoalTransaction {
    pub goal_id: Option<String>,
    pub account_id: String,
    pub amount: Decimal,
    pub kind: GoalTransactionKind,
    pub description: Option<String>,
}

impl NewGoalTransaction {
    /// Validates a caller-supplied deposit/withdrawal request.
    ///
    /// Transfer rows bypass this and are appended by the transfer operation
    /// itself.
    pub fn validate(&self) -> Result<()> {
        if self.kind == GoalTransactionKind::Transfer {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Transfer rows are created by the transfer operation".to_string(),
            )));
        }
        if self.goal_id.as_deref().map_or(true, |g| g.trim().is_empty()) {
            return Err(Error::Validation(ValidationError::MissingField(
                "goalId".to_string(),
            )));
        }
        if self.account_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "accountId".to_string(),
            )));
        }
        if self.amount <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Amount must be positive".to_string(),
            )));
        }
        Ok(())
    }
}
