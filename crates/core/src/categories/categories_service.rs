use std::sync::Arc;

use super::categories_model::{Category, CategoryKind, CategoryUpdate, NewCategory};
use super::categories_traits::{CategoryRepositoryTrait, CategoryServiceTrait};
use crate::errors::{DatabaseError, Error, Result, ValidationError};

/// Service for managing income and expense categories.
pub struct CategoryService {
    repository: Arc<dyn CategoryRepositoryTrait>,
}

impl CategoryService {
    pub fn new(repository: Arc<dyn CategoryRepositoryTrait>) -> Self {
        CategoryService { repository }
    }
}

/// Turns the store's unique-constraint violation into a caller-facing
/// validation error so storage details do not leak.
fn map_duplicate_name(err: Error, kind: CategoryKind, name: &str) -> Error {
    match err {
        Error::Database(DatabaseError::UniqueViolation(_)) => {
            Error::Validation(ValidationError::InvalidInput(format!(
                "A {} category named '{name}' already exists",
                kind.as_str()
            )))
        }
        other => other,
    }
}

#[async_trait::async_trait]
impl CategoryServiceTrait for CategoryService {
    async fn create_category(
        &self,
        kind: CategoryKind,
        user_id: &str,
        new_category: NewCategory,
    ) -> Result<Category> {
        new_category.validate(kind)?;
        let name = new_category.name.clone();
        self.repository
            .create(kind, user_id, new_category)
            .await
            .map_err(|e| map_duplicate_name(e, kind, &name))
    }

    async fn update_category(
        &self,
        kind: CategoryKind,
        user_id: &str,
        update: CategoryUpdate,
    ) -> Result<Category> {
        update.validate(kind)?;
        let name = update.name.clone();
        self.repository
            .update(kind, user_id, update)
            .await
            .map_err(|e| map_duplicate_name(e, kind, &name))
    }

    async fn delete_category(
        &self,
        kind: CategoryKind,
        user_id: &str,
        category_id: &str,
    ) -> Result<()> {
        let deleted = self.repository.delete(kind, user_id, category_id).await?;
        if deleted == 0 {
            return Err(Error::NotFound(format!(
                "{} category {category_id}",
                kind.as_str()
            )));
        }
        Ok(())
    }

    async fn list_categories(&self, kind: CategoryKind, user_id: &str) -> Result<Vec<Category>> {
        self.repository.list(kind, user_id).await
    }
}
