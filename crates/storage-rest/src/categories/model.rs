//! Row models for the category tables.
//!
//! Income and expense categories live in separate tables with the same shape,
//! except that only expense categories carry the recurring-cost flag.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use nestegg_core::categories::{Category, NewCategory};

/// A stored category row. `is_fixed` is absent on the income table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRow {
    pub id: String,
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub is_fixed: Option<bool>,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a category table.
#[derive(Debug, Clone, Serialize)]
pub struct NewCategoryRow {
    pub id: String,
    pub user_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_fixed: Option<bool>,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            name: row.name,
            is_fixed: row.is_fixed,
            created_at: row.created_at,
        }
    }
}

impl NewCategoryRow {
    pub fn from_new(user_id: &str, new_category: NewCategory) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            name: new_category.name,
            is_fixed: new_category.is_fixed,
        }
    }
}
