//! User settings domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BASE_CURRENCY, DEFAULT_BUDGET_PERIOD, DEFAULT_SAVING_PERCENTAGE};
use crate::errors::{Error, Result, ValidationError};

/// Per-user settings row. Exactly one exists per user; it is materialized
/// lazily with defaults on first access.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    pub id: String,
    pub user_id: String,
    pub base_currency: String,
    /// Share of each income event routed to savings by auto-save, 0-100.
    pub saving_percentage: Decimal,
    pub budget_period: String,
    pub monthly_income_target: Option<Decimal>,
    pub monthly_expense_budget: Option<Decimal>,
    pub auto_save_enabled: bool,
    /// The single funding account, if configured, through which all goal
    /// deposits and withdrawals must flow.
    pub savings_account_id: Option<String>,
}

/// Insert payload for a settings row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUserSettings {
    pub user_id: String,
    pub base_currency: String,
    pub saving_percentage: Decimal,
    pub budget_period: String,
    pub monthly_income_target: Option<Decimal>,
    pub monthly_expense_budget: Option<Decimal>,
    pub auto_save_enabled: bool,
    pub savings_account_id: Option<String>,
}

impl NewUserSettings {
    /// The defaults a first read materializes.
    pub fn defaults_for(user_id: &str) -> Self {
        NewUserSettings {
            user_id: user_id.to_string(),
            base_currency: DEFAULT_BASE_CURRENCY.to_string(),
            saving_percentage: DEFAULT_SAVING_PERCENTAGE,
            budget_period: DEFAULT_BUDGET_PERIOD.to_string(),
            monthly_income_target: Some(Decimal::ZERO),
            monthly_expense_budget: Some(Decimal::ZERO),
            auto_save_enabled: false,
            savings_account_id: None,
        }
    }
}

/// Partial update for a settings row; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettingsUpdate {
    pub base_currency: Option<String>,
    pub saving_percentage: Option<Decimal>,
    pub budget_period: Option<String>,
    pub monthly_income_target: Option<Decimal>,
    pub monthly_expense_budget: Option<Decimal>,
    pub auto_save_enabled: Option<bool>,
    pub savings_account_id: Option<String>,
}

impl UserSettingsUpdate {
    /// Validates the settings update data.
    pub fn validate(&self) -> Result<()> {
        if let Some(pct) = self.saving_percentage {
            if pct < Decimal::ZERO || pct > Decimal::ONE_HUNDRED {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Saving percentage must be between 0 and 100".to_string(),
                )));
            }
        }
        if let Some(ref currency) = self.base_currency {
            if currency.trim().is_empty() {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Base currency cannot be empty".to_string(),
                )));
            }
        }
        if let Some(ref period) = self.budget_period {
            if period.trim().is_empty() {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Budget period cannot be empty".to_string(),
                )));
            }
        }
        Ok(())
    }
}
