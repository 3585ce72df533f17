use log::debug;
use std::sync::Arc;

use super::goal_transactions_model::{GoalTransaction, GoalTransactionKind, NewGoalTransaction};
use super::goal_transactions_traits::{
    GoalTransactionRepositoryTrait, GoalTransactionServiceTrait,
};
use crate::accounts::AccountRepositoryTrait;
use crate::errors::{Error, Result, ValidationError};
use crate::goals::GoalRepositoryTrait;
use crate::settings::SettingsServiceTrait;

/// Service implementing the deposit/withdrawal protocol between funding
/// accounts and savings goals.
///
/// The store offers no multi-row transactions. Steps are ordered so that a
/// mid-sequence failure leaves a detectable inconsistency (an orphaned row or
/// an unmatched adjustment) rather than silently losing the event; see the
/// step comments in [`create_goal_transaction`].
///
/// [`create_goal_transaction`]: GoalTransactionServiceTrait::create_goal_transaction
pub struct GoalTransactionService {
    repository: Arc<dyn GoalTransactionRepositoryTrait>,
    account_repository: Arc<dyn AccountRepositoryTrait>,
    goal_repository: Arc<dyn GoalRepositoryTrait>,
    settings_service: Arc<dyn SettingsServiceTrait>,
}

impl GoalTransactionService {
    pub fn new(
        repository: Arc<dyn GoalTransactionRepositoryTrait>,
        account_repository: Arc<dyn AccountRepositoryTrait>,
        goal_repository: Arc<dyn GoalRepositoryTrait>,
        settings_service: Arc<dyn SettingsServiceTrait>,
    ) -> Self {
        Self {
            repository,
            account_repository,
            goal_repository,
            settings_service,
        }
    }

    /// When a designated savings account is configured, every goal
    /// transaction must flow through it.
    async fn check_designated_account(&self, user_id: &str, account_id: &str) -> Result<()> {
        let settings = self.settings_service.get_or_create(user_id).await?;
        if let Some(designated) = settings.savings_account_id {
            if designated != account_id {
                return Err(Error::PolicyViolation(format!(
                    "Goal transactions must use the designated savings account {designated}"
                )));
            }
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl GoalTransactionServiceTrait for GoalTransactionService {
    async fn create_goal_transaction(
        &self,
        user_id: &str,
        new_tx: NewGoalTransaction,
    ) -> Result<GoalTransaction> {
        new_tx.validate()?;
        self.check_designated_account(user_id, &new_tx.account_id)
            .await?;

        let account = self
            .account_repository
            .get_by_id(user_id, &new_tx.account_id)
            .await?;
        let goal_id = new_tx
            .goal_id
            .clone()
            .ok_or_else(|| Error::Validation(ValidationError::MissingField("goalId".to_string())))?;
        self.goal_repository.get_by_id(user_id, &goal_id).await?;

        if new_tx.kind == GoalTransactionKind::Deposit && account.balance < new_tx.amount {
            return Err(Error::InsufficientFunds {
                available: account.balance,
                requested: new_tx.amount,
            });
        }

        let amount = new_tx.amount;
        let kind = new_tx.kind;
        let account_id = new_tx.account_id.clone();
        debug!(
            "Goal {} for user {}: {} {} via account {}",
            goal_id,
            user_id,
            kind.as_str(),
            amount,
            account_id
        );

        // Step 1: durable row first, so the event is never lost untraced.
        let created = self.repository.insert(user_id, new_tx).await?;

        // Step 2/3: adjust goal, then account. A failure between these leaves
        // a visible inconsistency against the row from step 1.
        let (goal_delta, account_delta) = match kind {
            GoalTransactionKind::Deposit => (amount, -amount),
            GoalTransactionKind::Withdrawal => (-amount, amount),
            GoalTransactionKind::Transfer => unreachable!("rejected by validate()"),
        };
        self.goal_repository
            .adjust_current_amount(user_id, &goal_id, goal_delta)
            .await?;
        self.account_repository
            .adjust_balance(user_id, &account_id, account_delta)
            .await?;

        Ok(created)
    }

    async fn list_goal_transactions(
        &self,
        user_id: &str,
        goal_id: &str,
    ) -> Result<Vec<GoalTransaction>> {
        self.goal_repository.get_by_id(user_id, goal_id).await?;
        self.repository.list_for_goal(user_id, goal_id).await
    }

    async fn delete_goal_transaction(&self, user_id: &str, tx_id: &str) -> Result<()> {
        let tx = self.repository.get_by_id(user_id, tx_id).await?;
        let goal_id = match (&tx.kind, &tx.goal_id) {
            (GoalTransactionKind::Transfer, _) => {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Transfer log rows cannot be deleted".to_string(),
                )));
            }
            (_, Some(goal_id)) => goal_id.clone(),
            (_, None) => {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Goal transaction has no goal".to_string(),
                )));
            }
        };

        // Reverse both adjustments before removing the row, so a failure
        // mid-sequence shows up as an orphaned row referencing corrected
        // balances rather than a double-counted amount.
        let (goal_delta, account_delta) = match tx.kind {
            GoalTransactionKind::Deposit => (-tx.amount, tx.amount),
            GoalTransactionKind::Withdrawal => (tx.amount, -tx.amount),
            GoalTransactionKind::Transfer => unreachable!("handled above"),
        };
        self.goal_repository
            .adjust_current_amount(user_id, &goal_id, goal_delta)
            .await?;
        self.account_repository
            .adjust_balance(user_id, &tx.account_id, account_delta)
            .await?;
        self.repository.delete(user_id, tx_id).await?;
        Ok(())
    }
}
