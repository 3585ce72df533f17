use log::{debug, error};
use rust_decimal::Decimal;
use std::sync::Arc;

use super::transactions_model::{
    CashFlow, CashTransaction, CashTransactionUpdate, NewCashTransaction,
};
use super::transactions_traits::{CashTransactionRepositoryTrait, CashTransactionServiceTrait};
use crate::accounts::AccountRepositoryTrait;
use crate::constants::PERCENT_DIVISOR;
use crate::errors::{Error, Result};
use crate::settings::SettingsServiceTrait;
use crate::transfers::{TransferRequest, TransferServiceTrait};

/// The balance mutation engine for income and expense transactions.
///
/// Every create/update/delete pairs a row mutation with a balance adjustment
/// on the owning account. The store has no multi-row transactions, so the
/// pair is ordered: on create the row lands first (a failed balance step
/// leaves a detectable orphan instead of a vanished event); on delete the
/// balance is reversed first (a failed row delete leaves an orphan against a
/// corrected balance instead of a double-count).
pub struct CashTransactionService {
    repository: Arc<dyn CashTransactionRepositoryTrait>,
    account_repository: Arc<dyn AccountRepositoryTrait>,
    settings_service: Arc<dyn SettingsServiceTrait>,
    transfer_service: Arc<dyn TransferServiceTrait>,
}

impl CashTransactionService {
    pub fn new(
        repository: Arc<dyn CashTransactionRepositoryTrait>,
        account_repository: Arc<dyn AccountRepositoryTrait>,
        settings_service: Arc<dyn SettingsServiceTrait>,
        transfer_service: Arc<dyn TransferServiceTrait>,
    ) -> Self {
        Self {
            repository,
            account_repository,
            settings_service,
            transfer_service,
        }
    }

    async fn create(
        &self,
        flow: CashFlow,
        user_id: &str,
        new_tx: NewCashTransaction,
    ) -> Result<CashTransaction> {
        new_tx.validate()?;

        let account = self
            .account_repository
            .get_by_id(user_id, &new_tx.account_id)
            .await?;
        if flow == CashFlow::Expense && account.balance < new_tx.amount {
            return Err(Error::InsufficientFunds {
                available: account.balance,
                requested: new_tx.amount,
            });
        }

        let amount = new_tx.amount;
        let account_id = new_tx.account_id.clone();
        let perform_auto_save = new_tx.perform_auto_save;

        // Row first, then balance: a failure after this point is a visible
        // inconsistency, not a lost financial event.
        let created = self.repository.insert(flow, user_id, new_tx).await?;
        self.account_repository
            .adjust_balance(user_id, &account_id, flow.signed(amount))
            .await?;

        if flow == CashFlow::Income {
            self.run_auto_save(user_id, &account_id, amount, perform_auto_save)
                .await;
        }

        Ok(created)
    }

    /// Post-income auto-save trigger.
    ///
    /// Isolation boundary: the income is already committed, so every failure
    /// here is logged and swallowed. The derived convenience transfer never
    /// fails or rolls back the primary financial event.
    async fn run_auto_save(
        &self,
        user_id: &str,
        income_account_id: &str,
        income_amount: Decimal,
        requested: bool,
    ) {
        let settings = match self.settings_service.get_or_create(user_id).await {
            Ok(settings) => settings,
            Err(e) => {
                error!("Auto-save skipped for user {user_id}: settings lookup failed: {e}");
                return;
            }
        };

        if !(settings.auto_save_enabled || requested) {
            return;
        }
        let Some(savings_account_id) = settings.savings_account_id else {
            debug!("Auto-save skipped for user {user_id}: no designated savings account");
            return;
        };
        if settings.saving_percentage <= Decimal::ZERO {
            return;
        }

        let amount_to_save = income_amount * settings.saving_percentage / PERCENT_DIVISOR;
        if amount_to_save <= Decimal::ZERO {
            return;
        }
        if savings_account_id == income_account_id {
            // Income already landed in the savings account.
            debug!("Auto-save skipped for user {user_id}: income arrived in the savings account");
            return;
        }

        let request = TransferRequest {
            from_account_id: income_account_id.to_string(),
            to_account_id: savings_account_id,
            amount: amount_to_save,
            description: Some("Auto-save".to_string()),
        };
        if let Err(e) = self
            .transfer_service
            .create_account_transfer(user_id, request)
            .await
        {
            error!("Auto-save transfer of {amount_to_save} failed for user {user_id}: {e}");
        }
    }

    async fn update(
        &self,
        flow: CashFlow,
        user_id: &str,
        update: CashTransactionUpdate,
    ) -> Result<CashTransaction> {
        update.validate()?;

        let existing = self.repository.get_by_id(flow, user_id, &update.id).await?;
        if let Some(new_amount) = update.amount {
            if new_amount != existing.amount {
                let account = self
                    .account_repository
                    .get_by_id(user_id, &existing.account_id)
                    .await?;
                let diff = match flow {
                    CashFlow::Expense => existing.amount - new_amount,
                    CashFlow::Income => new_amount - existing.amount,
                };
                if flow == CashFlow::Expense && account.balance + diff < Decimal::ZERO {
                    return Err(Error::InsufficientFunds {
                        available: account.balance + existing.amount,
                        requested: new_amount,
                    });
                }
                self.account_repository
                    .adjust_balance(user_id, &existing.account_id, diff)
                    .await?;
            }
        }

        self.repository.update_row(flow, user_id, update).await
    }

    async fn delete(&self, flow: CashFlow, user_id: &str, tx_id: &str) -> Result<()> {
        let existing = self.repository.get_by_id(flow, user_id, tx_id).await?;

        // Reverse the balance before removing the row.
        self.account_repository
            .adjust_balance(user_id, &existing.account_id, -flow.signed(existing.amount))
            .await?;
        self.repository.delete(flow, user_id, tx_id).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl CashTransactionServiceTrait for CashTransactionService {
    async fn create_income(
        &self,
        user_id: &str,
        new_tx: NewCashTransaction,
    ) -> Result<CashTransaction> {
        self.create(CashFlow::Income, user_id, new_tx).await
    }

    async fn update_income(
        &self,
        user_id: &str,
        update: CashTransactionUpdate,
    ) -> Result<CashTransaction> {
        self.update(CashFlow::Income, user_id, update).await
    }

    async fn delete_income(&self, user_id: &str, tx_id: &str) -> Result<()> {
        self.delete(CashFlow::Income, user_id, tx_id).await
    }

    async fn create_expense(
        &self,
        user_id: &str,
        new_tx: NewCashTransaction,
    ) -> Result<CashTransaction> {
        self.create(CashFlow::Expense, user_id, new_tx).await
    }

    async fn update_expense(
        &self,
        user_id: &str,
        update: CashTransactionUpdate,
    ) -> Result<CashTransaction> {
        self.update(CashFlow::Expense, user_id, update).await
    }

    async fn delete_expense(&self, user_id: &str, tx_id: &str) -> Result<()> {
        self.delete(CashFlow::Expense, user_id, tx_id).await
    }

    async fn list_transactions(
        &self,
        flow: CashFlow,
        user_id: &str,
        account_id: &str,
    ) -> Result<Vec<CashTransaction>> {
        self.account_repository
            .get_by_id(user_id, account_id)
            .await?;
        self.repository
            .list_for_account(flow, user_id, account_id)
            .await
    }
}
