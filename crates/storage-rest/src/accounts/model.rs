//! Row models for the `funding_accounts` table.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use nestegg_core::accounts::{FundingAccount, NewFundingAccount};

/// A stored `funding_accounts` row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundingAccountRow {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub balance: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload for `funding_accounts`; timestamps are store defaults.
#[derive(Debug, Clone, Serialize)]
pub struct NewFundingAccountRow {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub balance: Decimal,
}

impl From<FundingAccountRow> for FundingAccount {
    fn from(row: FundingAccountRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            name: row.name,
            balance: row.balance,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl NewFundingAccountRow {
    pub fn from_new(user_id: &str, new_account: NewFundingAccount) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            name: new_account.name,
            balance: new_account.balance,
        }
    }
}
