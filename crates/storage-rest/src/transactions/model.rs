//! Row models shared by the `income_transactions` and `expense_transactions`
//! tables. The two tables have identical shape; [`CashFlow`] selects which
//! one a request targets.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use nestegg_core::transactions::{CashTransaction, NewCashTransaction};

/// A stored cash transaction row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashTransactionRow {
    pub id: String,
    pub user_id: String,
    pub account_id: String,
    #[serde(default)]
    pub category_id: Option<String>,
    pub amount: Decimal,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a cash transaction table.
///
/// The auto-save request flag on the input model is engine input, not row
/// data, so it never appears here.
#[derive(Debug, Clone, Serialize)]
pub struct NewCashTransactionRow {
    pub id: String,
    pub user_id: String,
    pub account_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<CashTransactionRow> for CashTransaction {
    fn from(row: CashTransactionRow) -> Self {
        Self {
            id: row.id,
            account_id: row.account_id,
            category_id: row.category_id,
            amount: row.amount,
            description: row.description,
            created_at: row.created_at,
        }
    }
}

impl NewCashTransactionRow {
    pub fn from_new(user_id: &str, new_tx: NewCashTransaction) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            account_id: new_tx.account_id,
            category_id: new_tx.category_id,
            amount: new_tx.amount,
            description: new_tx.description,
        }
    }
}
