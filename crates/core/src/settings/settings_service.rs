use log::debug;
use std::sync::Arc;

use super::settings_model::{NewUserSettings, UserSettings, UserSettingsUpdate};
use super::settings_traits::{SettingsRepositoryTrait, SettingsServiceTrait};
use crate::accounts::AccountRepositoryTrait;
use crate::errors::{DatabaseError, Error, Result};

/// Service that lazily materializes and maintains per-user settings.
pub struct SettingsService {
    repository: Arc<dyn SettingsRepositoryTrait>,
    account_repository: Arc<dyn AccountRepositoryTrait>,
}

impl SettingsService {
    pub fn new(
        repository: Arc<dyn SettingsRepositoryTrait>,
        account_repository: Arc<dyn AccountRepositoryTrait>,
    ) -> Self {
        SettingsService {
            repository,
            account_repository,
        }
    }
}

#[async_trait::async_trait]
impl SettingsServiceTrait for SettingsService {
    async fn get_or_create(&self, user_id: &str) -> Result<UserSettings> {
        if let Some(settings) = self.repository.find_by_user_id(user_id).await? {
            return Ok(settings);
        }

        debug!("Materializing default settings for user {user_id}");
        match self
            .repository
            .insert(NewUserSettings::defaults_for(user_id))
            .await
        {
            Ok(created) => Ok(created),
            // Two concurrent first reads can both miss the row; the store's
            // unique constraint on user_id lets exactly one insert win. The
            // loser re-reads the winner's row.
            Err(Error::Database(DatabaseError::UniqueViolation(_))) => self
                .repository
                .find_by_user_id(user_id)
                .await?
                .ok_or_else(|| {
                    Error::Database(DatabaseError::Internal(
                        "Settings row vanished after unique violation".to_string(),
                    ))
                }),
            Err(e) => Err(e),
        }
    }

    async fn update_settings(
        &self,
        user_id: &str,
        update: UserSettingsUpdate,
    ) -> Result<UserSettings> {
        update.validate()?;

        // A designated savings account must belong to the caller.
        if let Some(ref account_id) = update.savings_account_id {
            self.account_repository
                .get_by_id(user_id, account_id)
                .await?;
        }

        // Ensure the row exists before patching it.
        self.get_or_create(user_id).await?;
        self.repository.update(user_id, update).await
    }
}
