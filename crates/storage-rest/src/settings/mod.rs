//! Row-store implementation for user settings.

mod model;
mod repository;

pub use model::{NewUserSettingsRow, UserSettingsRow};
pub use repository::SettingsRepository;
