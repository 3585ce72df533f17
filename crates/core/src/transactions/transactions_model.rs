//! Cash transaction domain models.
//!
//! Income and expense transactions share one shape and one engine; the
//! [`CashFlow`] discriminant selects which table a row lives in and which
//! sign its amount applies to the account balance.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Whether a cash transaction adds to or subtracts from its account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CashFlow {
    Income,
    Expense,
}

impl CashFlow {
    pub fn as_str(&self) -> &'static str {
        match self {
            CashFlow::Income => "income",
            CashFlow::Expense => "expense",
        }
    }

    /// The signed balance delta a transaction of this flow applies on create.
    pub fn signed(&self, amount: Decimal) -> Decimal {
        match self {
            CashFlow::Income => amount,
            CashFlow::Expense => -amount,
        }
    }
}

/// Domain model for a one-sided ledger event against exactly one funding
/// account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashTransaction {
    pub id: String,
    pub account_id: String,
    pub category_id: Option<String>,
    pub amount: Decimal,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input model for creating an income or expense transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCashTransaction {
    pub account_id: String,
    pub category_id: Option<String>,
    pub amount: Decimal,
    pub description: Option<String>,
    /// Income only: request the auto-save transfer even when the user's
    /// settings have it disabled.
    #[serde(default)]
    pub perform_auto_save: bool,
}

impl NewCashTransaction {
    /// Validates the new transaction data.
    pub fn validate(&self) -> Result<()> {
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

/// Partial update for a cash transaction.
///
/// There is deliberately no account field: a transaction cannot move between
/// accounts, only its amount, category, and description can change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashTransactionUpdate {
    pub id: String,
    pub amount: Option<Decimal>,
    pub category_id: Option<String>,
    pub description: Option<String>,
}

impl CashTransactionUpdate {
    /// Validates the transaction update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "id".to_string(),
            )));
        }
        if let Some(amount) = self.amount {
            if amount <= Decimal::ZERO {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Amount must be positive".to_string(),
                )));
            }
        }
        Ok(())
    }
}
