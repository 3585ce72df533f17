use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use nestegg_core::settings::{
    NewUserSettings, SettingsRepositoryTrait, UserSettings, UserSettingsUpdate,
};
use nestegg_core::Result;

use super::model::{NewUserSettingsRow, UserSettingsRow};
use crate::client::{Filter, RestLedgerClient};
use crate::errors::map_missing;

const TABLE: &str = "user_settings";

pub struct SettingsRepository {
    client: Arc<RestLedgerClient>,
}

impl SettingsRepository {
    pub fn new(client: Arc<RestLedgerClient>) -> Self {
        SettingsRepository { client }
    }
}

#[async_trait]
impl SettingsRepositoryTrait for SettingsRepository {
    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<UserSettings>> {
        let mut rows: Vec<UserSettingsRow> = self
            .client
            .select(TABLE, &[Filter::eq("user_id", user_id)], None)
            .await?;
        if rows.is_empty() {
            return Ok(None);
        }
        Ok(Some(rows.swap_remove(0).into()))
    }

    async fn insert(&self, new_settings: NewUserSettings) -> Result<UserSettings> {
        let row: UserSettingsRow = self
            .client
            .insert(TABLE, &NewUserSettingsRow::from(new_settings))
            .await?;
        Ok(row.into())
    }

    async fn update(&self, user_id: &str, update: UserSettingsUpdate) -> Result<UserSettings> {
        let mut patch = serde_json::Map::new();
        if let Some(currency) = &update.base_currency {
            patch.insert("base_currency".to_string(), json!(currency));
        }
        if let Some(pct) = update.saving_percentage {
            patch.insert("saving_percentage".to_string(), json!(pct));
        }
        if let Some(period) = &update.budget_period {
            patch.insert("budget_period".to_string(), json!(period));
        }
        if let Some(target) = update.monthly_income_target {
            patch.insert("monthly_income_target".to_string(), json!(target));
        }
        if let Some(budget) = update.monthly_expense_budget {
            patch.insert("monthly_expense_budget".to_string(), json!(budget));
        }
        if let Some(enabled) = update.auto_save_enabled {
            patch.insert("auto_save_enabled".to_string(), json!(enabled));
        }
        if let Some(account_id) = &update.savings_account_id {
            patch.insert("savings_account_id".to_string(), json!(account_id));
        }
        if patch.is_empty() {
            let row: UserSettingsRow = self
                .client
                .select_one(TABLE, &[Filter::eq("user_id", user_id)])
                .await
                .map_err(|e| map_missing(e, || format!("Settings for user {user_id}")))?;
            return Ok(row.into());
        }
        let row: UserSettingsRow = self
            .client
            .update_one(TABLE, &[Filter::eq("user_id", user_id)], &patch)
            .await
            .map_err(|e| map_missing(e, || format!("Settings for user {user_id}")))?;
        Ok(row.into())
    }
}
