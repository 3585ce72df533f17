//! Settings repository and service traits.

use async_trait::async_trait;

use super::settings_model::{NewUserSettings, UserSettings, UserSettingsUpdate};
use crate::errors::Result;

/// Trait for settings repository operations.
///
/// The store carries a unique constraint on `user_id`; a concurrent duplicate
/// insert surfaces as `DatabaseError::UniqueViolation`.
#[async_trait]
pub trait SettingsRepositoryTrait: Send + Sync {
    /// Returns the user's settings row, or `None` if it has never been
    /// materialized.
    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<UserSettings>>;

    async fn insert(&self, new_settings: NewUserSettings) -> Result<UserSettings>;

    async fn update(&self, user_id: &str, update: UserSettingsUpdate) -> Result<UserSettings>;
}

/// Trait for settings service operations.
#[async_trait]
pub trait SettingsServiceTrait: Send + Sync {
    /// Returns the user's settings, creating the default row on first access.
    async fn get_or_create(&self, user_id: &str) -> Result<UserSettings>;

    /// Applies a partial update with validation and ownership checks.
    async fn update_settings(
        &self,
        user_id: &str,
        update: UserSettingsUpdate,
    ) -> Result<UserSettings>;
}
