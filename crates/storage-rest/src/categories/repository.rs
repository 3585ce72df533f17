use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use nestegg_core::categories::{
    Category, CategoryKind, CategoryRepositoryTrait, CategoryUpdate, NewCategory,
};
use nestegg_core::Result;

use super::model::{CategoryRow, NewCategoryRow};
use crate::client::{Filter, RestLedgerClient};
use crate::errors::map_missing;

/// Maps the category kind to its table, mirroring the income/expense split
/// of the transaction tables.
fn table(kind: CategoryKind) -> &'static str {
    match kind {
        CategoryKind::Income => "income_categories",
        CategoryKind::Expense => "expense_categories",
    }
}

pub struct CategoryRepository {
    client: Arc<RestLedgerClient>,
}

impl CategoryRepository {
    pub fn new(client: Arc<RestLedgerClient>) -> Self {
        CategoryRepository { client }
    }

    fn owner(user_id: &str) -> Filter {
        Filter::eq("user_id", user_id)
    }
}

#[async_trait]
impl CategoryRepositoryTrait for CategoryRepository {
    async fn create(
        &self,
        kind: CategoryKind,
        user_id: &str,
        new_category: NewCategory,
    ) -> Result<Category> {
        let row: CategoryRow = self
            .client
            .insert(
                table(kind),
                &NewCategoryRow::from_new(user_id, new_category),
            )
            .await?;
        Ok(row.into())
    }

    async fn update(
        &self,
        kind: CategoryKind,
        user_id: &str,
        update: CategoryUpdate,
    ) -> Result<Category> {
        let mut patch = serde_json::Map::new();
        patch.insert("name".to_string(), json!(update.name));
        if kind == CategoryKind::Expense {
            patch.insert("is_fixed".to_string(), json!(update.is_fixed));
        }
        let row: CategoryRow = self
            .client
            .update_one(
                table(kind),
                &[Self::owner(user_id), Filter::eq("id", &update.id)],
                &patch,
            )
            .await
            .map_err(|e| map_missing(e, || format!("Category {}", update.id)))?;
        Ok(row.into())
    }

    async fn delete(&self, kind: CategoryKind, user_id: &str, category_id: &str) -> Result<usize> {
        self.client
            .delete(
                table(kind),
                &[Self::owner(user_id), Filter::eq("id", category_id)],
            )
            .await
    }

    async fn get_by_id(
        &self,
        kind: CategoryKind,
        user_id: &str,
        category_id: &str,
    ) -> Result<Category> {
        let row: CategoryRow = self
            .client
            .select_one(
                table(kind),
                &[Self::owner(user_id), Filter::eq("id", category_id)],
            )
            .await
            .map_err(|e| map_missing(e, || format!("Category {category_id}")))?;
        Ok(row.into())
    }

    async fn list(&self, kind: CategoryKind, user_id: &str) -> Result<Vec<Category>> {
        let rows: Vec<CategoryRow> = self
            .client
            .select(table(kind), &[Self::owner(user_id)], Some("name.asc"))
            .await?;
        Ok(rows.into_iter().map(Category::from).collect())
    }
}
