use log::debug;
use std::sync::Arc;

use super::accounts_model::{FundingAccount, FundingAccountUpdate, NewFundingAccount};
use super::accounts_traits::{AccountRepositoryTrait, AccountServiceTrait};
use crate::errors::{Error, Result, ValidationError};
use crate::goal_transactions::GoalTransactionRepositoryTrait;
use crate::transactions::{CashFlow, CashTransactionRepositoryTrait};

/// Service for managing funding accounts.
pub struct AccountService {
    repository: Arc<dyn AccountRepositoryTrait>,
    cash_repository: Arc<dyn CashTransactionRepositoryTrait>,
    goal_tx_repository: Arc<dyn GoalTransactionRepositoryTrait>,
}

impl AccountService {
    /// Creates a new AccountService instance.
    pub fn new(
        repository: Arc<dyn AccountRepositoryTrait>,
        cash_repository: Arc<dyn CashTransactionRepositoryTrait>,
        goal_tx_repository: Arc<dyn GoalTransactionRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            cash_repository,
            goal_tx_repository,
        }
    }

    /// True if any income, expense, transfer, or goal transaction still
    /// references the account.
    async fn is_referenced(&self, user_id: &str, account_id: &str) -> Result<bool> {
        for flow in [CashFlow::Income, CashFlow::Expense] {
            if !self
                .cash_repository
                .list_for_account(flow, user_id, account_id)
                .await?
                .is_empty()
            {
                return Ok(true);
            }
        }
        Ok(!self
            .goal_tx_repository
            .list_for_account(user_id, account_id)
            .await?
            .is_empty())
    }
}

#[async_trait::async_trait]
impl AccountServiceTrait for AccountService {
    async fn create_account(
        &self,
        user_id: &str,
        new_account: NewFundingAccount,
    ) -> Result<FundingAccount> {
        new_account.validate()?;
        debug!(
            "Creating account '{}' for user {}",
            new_account.name, user_id
        );
        self.repository.create(user_id, new_account).await
    }

    async fn update_account(
        &self,
        user_id: &str,
        update: FundingAccountUpdate,
    ) -> Result<FundingAccount> {
        update.validate()?;
        self.repository.update(user_id, update).await
    }

    async fn delete_account(&self, user_id: &str, account_id: &str) -> Result<()> {
        // Balances are reconstructable from transaction history, so rows that
        // still reference the account must outlive it.
        if self.is_referenced(user_id, account_id).await? {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Account still has transactions; delete or move them first".to_string(),
            )));
        }
        let deleted = self.repository.delete(user_id, account_id).await?;
        if deleted == 0 {
            return Err(Error::NotFound(format!("Account {account_id}")));
        }
        Ok(())
    }

    async fn get_account(&self, user_id: &str, account_id: &str) -> Result<FundingAccount> {
        self.repository.get_by_id(user_id, account_id).await
    }

    async fn list_accounts(&self, user_id: &str) -> Result<Vec<FundingAccount>> {
        self.repository.list(user_id).await
    }
}
