//! Category repository and service traits.

use async_trait::async_trait;

use super::categories_model::{Category, CategoryKind, CategoryUpdate, NewCategory};
use crate::errors::Result;

/// Trait for category repository operations. `kind` selects the income or
/// expense category table.
#[async_trait]
pub trait CategoryRepositoryTrait: Send + Sync {
    async fn create(
        &self,
        kind: CategoryKind,
        user_id: &str,
        new_category: NewCategory,
    ) -> Result<Category>;
    async fn update(
        &self,
        kind: CategoryKind,
        user_id: &str,
        update: CategoryUpdate,
    ) -> Result<Category>;
    async fn delete(&self, kind: CategoryKind, user_id: &str, category_id: &str) -> Result<usize>;
    async fn get_by_id(
        &self,
        kind: CategoryKind,
        user_id: &str,
        category_id: &str,
    ) -> Result<Category>;
    async fn list(&self, kind: CategoryKind, user_id: &str) -> Result<Vec<Category>>;
}

/// Trait for category service operations.
#[async_trait]
pub trait CategoryServiceTrait: Send + Sync {
    async fn create_category(
        &self,
        kind: CategoryKind,
        user_id: &str,
        new_category: NewCategory,
    ) -> Result<Category>;
    async fn update_category(
        &self,
        kind: CategoryKind,
        user_id: &str,
        update: CategoryUpdate,
    ) -> Result<Category>;
    async fn delete_category(
        &self,
        kind: CategoryKind,
        user_id: &str,
        category_id: &str,
    ) -> Result<()>;
    async fn list_categories(&self, kind: CategoryKind, user_id: &str) -> Result<Vec<Category>>;
}
