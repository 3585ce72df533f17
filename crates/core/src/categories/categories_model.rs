//! Income/expense category domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Which kind of category table an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Income,
    Expense,
}

impl CategoryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKind::Income => "income",
            CategoryKind::Expense => "expense",
        }
    }
}

/// Domain model for a classification label. Categories carry no balance.
///
/// Names are unique per user per kind; the store enforces this with a unique
/// constraint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub user_id: String,
    pub name: String,
    /// Whether the expense recurs at a fixed cadence. Always `None` for
    /// income categories.
    pub is_fixed: Option<bool>,
    pub created_at: DateTime<Utc>,
}

/// Input model for creating a new category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: String,
    pub is_fixed: Option<bool>,
}

impl NewCategory {
    pub fn validate(&self, kind: CategoryKind) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Category name cannot be empty".to_string(),
            )));
        }
        if kind == CategoryKind::Income && self.is_fixed.is_some() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Income categories have no fixed flag".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for updating an existing category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUpdate {
    pub id: String,
    pub name: String,
    pub is_fixed: Option<bool>,
}

impl CategoryUpdate {
    pub fn validate(&self, kind: CategoryKind) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "id".to_string(),
            )));
        }
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Category name cannot be empty".to_string(),
            )));
        }
        if kind == CategoryKind::Income && self.is_fixed.is_some() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Income categories have no fixed flag".to_string(),
            )));
        }
        Ok(())
    }
}
