//! Row models for the `user_settings` table.
//!
//! The table carries a unique constraint on `user_id`; a racing second insert
//! fails with a unique violation, which the settings resolver turns into a
//! re-read of the winner's row.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use nestegg_core::settings::{NewUserSettings, UserSettings};

/// A stored `user_settings` row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSettingsRow {
    pub id: String,
    pub user_id: String,
    pub base_currency: String,
    pub saving_percentage: Decimal,
    pub budget_period: String,
    #[serde(default)]
    pub monthly_income_target: Option<Decimal>,
    #[serde(default)]
    pub monthly_expense_budget: Option<Decimal>,
    pub auto_save_enabled: bool,
    #[serde(default)]
    pub savings_account_id: Option<String>,
}

/// Insert payload for `user_settings`.
#[derive(Debug, Clone, Serialize)]
pub struct NewUserSettingsRow {
    pub id: String,
    pub user_id: String,
    pub base_currency: String,
    pub saving_percentage: Decimal,
    pub budget_period: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_income_target: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_expense_budget: Option<Decimal>,
    pub auto_save_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings_account_id: Option<String>,
}

impl From<UserSettingsRow> for UserSettings {
    fn from(row: UserSettingsRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            base_currency: row.base_currency,
            saving_percentage: row.saving_percentage,
            budget_period: row.budget_period,
            monthly_income_target: row.monthly_income_target,
            monthly_expense_budget: row.monthly_expense_budget,
            auto_save_enabled: row.auto_save_enabled,
            savings_account_id: row.savings_account_id,
        }
    }
}

impl From<NewUserSettings> for NewUserSettingsRow {
    fn from(new_settings: NewUserSettings) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: new_settings.user_id,
            base_currency: new_settings.base_currency,
            saving_percentage: new_settings.saving_percentage,
            budget_period: new_settings.budget_period,
            monthly_income_target: new_settings.monthly_income_target,
            monthly_expense_budget: new_settings.monthly_expense_budget,
            auto_save_enabled: new_settings.auto_save_enabled,
            savings_account_id: new_settings.savings_account_id,
        }
    }
}
