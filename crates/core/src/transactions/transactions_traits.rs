//! Cash transaction repository and service traits.

use async_trait::async_trait;

use super::transactions_model::{
    CashFlow, CashTransaction, CashTransactionUpdate, NewCashTransaction,
};
use crate::errors::Result;

/// Trait for cash transaction repository operations.
///
/// `flow` selects the income or expense table. Row methods never touch the
/// account balance; the service pairs them with balance adjustments.
#[async_trait]
pub trait CashTransactionRepositoryTrait: Send + Sync {
    async fn insert(
        &self,
        flow: CashFlow,
        user_id: &str,
        new_tx: NewCashTransaction,
    ) -> Result<CashTransaction>;

    async fn get_by_id(&self, flow: CashFlow, user_id: &str, tx_id: &str)
        -> Result<CashTransaction>;

    async fn list_for_account(
        &self,
        flow: CashFlow,
        user_id: &str,
        account_id: &str,
    ) -> Result<Vec<CashTransaction>>;

    /// Patches the row fields only (amount, category, description).
    async fn update_row(
        &self,
        flow: CashFlow,
        user_id: &str,
        update: CashTransactionUpdate,
    ) -> Result<CashTransaction>;

    async fn delete(&self, flow: CashFlow, user_id: &str, tx_id: &str) -> Result<usize>;
}

/// Trait for the income/expense operations exposed to the routing layer.
#[async_trait]
pub trait CashTransactionServiceTrait: Send + Sync {
    async fn create_income(
        &self,
        user_id: &str,
        new_tx: NewCashTransaction,
    ) -> Result<CashTransaction>;
    async fn update_income(
        &self,
        user_id: &str,
        update: CashTransactionUpdate,
    ) -> Result<CashTransaction>;
    async fn delete_income(&self, user_id: &str, tx_id: &str) -> Result<()>;

    async fn create_expense(
        &self,
        user_id: &str,
        new_tx: NewCashTransaction,
    ) -> Result<CashTransaction>;
    async fn update_expense(
        &self,
        user_id: &str,
        update: CashTransactionUpdate,
    ) -> Result<CashTransaction>;
    async fn delete_expense(&self, user_id: &str, tx_id: &str) -> Result<()>;

    async fn list_transactions(
        &self,
        flow: CashFlow,
        user_id: &str,
        account_id: &str,
    ) -> Result<Vec<CashTransaction>>;
}
