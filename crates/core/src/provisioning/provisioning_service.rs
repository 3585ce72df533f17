use log::debug;
use std::collections::HashSet;
use std::sync::Arc;

use super::provisioning_model::ProvisioningDefaults;
use crate::accounts::{AccountRepositoryTrait, NewFundingAccount};
use crate::categories::{CategoryKind, CategoryRepositoryTrait, NewCategory};
use crate::errors::Result;

/// Trait for the user provisioning operation.
#[async_trait::async_trait]
pub trait ProvisioningServiceTrait: Send + Sync {
    /// Seeds a user's starting categories and accounts.
    ///
    /// Idempotent per entity name: names that already exist for the user are
    /// skipped, so a retried provisioning call never duplicates rows.
    async fn provision_user(&self, user_id: &str, defaults: &ProvisioningDefaults) -> Result<()>;
}

/// Service seeding a new user's starting entities.
pub struct ProvisioningService {
    category_repository: Arc<dyn CategoryRepositoryTrait>,
    account_repository: Arc<dyn AccountRepositoryTrait>,
}

impl ProvisioningService {
    pub fn new(
        category_repository: Arc<dyn CategoryRepositoryTrait>,
        account_repository: Arc<dyn AccountRepositoryTrait>,
    ) -> Self {
        Self {
            category_repository,
            account_repository,
        }
    }
}

#[async_trait::async_trait]
impl ProvisioningServiceTrait for ProvisioningService {
    async fn provision_user(&self, user_id: &str, defaults: &ProvisioningDefaults) -> Result<()> {
        debug!(
            "Provisioning user {user_id}: {} income categories, {} expense categories, {} accounts",
            defaults.default_income_categories.len(),
            defaults.default_expense_categories.len(),
            defaults.default_accounts.len()
        );

        let existing_income: HashSet<String> = self
            .category_repository
            .list(CategoryKind::Income, user_id)
            .await?
            .into_iter()
            .map(|c| c.name)
            .collect();
        for name in &defaults.default_income_categories {
            if existing_income.contains(name) {
                continue;
            }
            self.category_repository
                .create(
                    CategoryKind::Income,
                    user_id,
                    NewCategory {
                        name: name.clone(),
                        is_fixed: None,
                    },
                )
                .await?;
        }

        let existing_expense: HashSet<String> = self
            .category_repository
            .list(CategoryKind::Expense, user_id)
            .await?
            .into_iter()
            .map(|c| c.name)
            .collect();
        for category in &defaults.default_expense_categories {
            if existing_expense.contains(&category.name) {
                continue;
            }
            self.category_repository
                .create(
                    CategoryKind::Expense,
                    user_id,
                    NewCategory {
                        name: category.name.clone(),
                        is_fixed: Some(category.is_fixed),
                    },
                )
                .await?;
        }

        let existing_accounts: HashSet<String> = self
            .account_repository
            .list(user_id)
            .await?
            .into_iter()
            .map(|a| a.name)
            .collect();
        for account in &defaults.default_accounts {
            if existing_accounts.contains(&account.name) {
                continue;
            }
            self.account_repository
                .create(
                    user_id,
                    NewFundingAccount {
                        name: account.name.clone(),
                        balance: account.balance,
                    },
                )
                .await?;
        }

        Ok(())
    }
}
