use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use nestegg_core::transactions::{
    CashFlow, CashTransaction, CashTransactionRepositoryTrait, CashTransactionUpdate,
    NewCashTransaction,
};
use nestegg_core::Result;

use super::model::{CashTransactionRow, NewCashTransactionRow};
use crate::client::{Filter, RestLedgerClient};
use crate::errors::map_missing;

/// Maps the flow direction to its table.
fn table(flow: CashFlow) -> &'static str {
    match flow {
        CashFlow::Income => "income_transactions",
        CashFlow::Expense => "expense_transactions",
    }
}

pub struct CashTransactionRepository {
    client: Arc<RestLedgerClient>,
}

impl CashTransactionRepository {
    pub fn new(client: Arc<RestLedgerClient>) -> Self {
        CashTransactionRepository { client }
    }

    fn owner(user_id: &str) -> Filter {
        Filter::eq("user_id", user_id)
    }
}

#[async_trait]
impl CashTransactionRepositoryTrait for CashTransactionRepository {
    async fn insert(
        &self,
        flow: CashFlow,
        user_id: &str,
        new_tx: NewCashTransaction,
    ) -> Result<CashTransaction> {
        let row: CashTransactionRow = self
            .client
            .insert(table(flow), &NewCashTransactionRow::from_new(user_id, new_tx))
            .await?;
        Ok(row.into())
    }

    async fn get_by_id(
        &self,
        flow: CashFlow,
        user_id: &str,
        tx_id: &str,
    ) -> Result<CashTransaction> {
        let row: CashTransactionRow = self
            .client
            .select_one(table(flow), &[Self::owner(user_id), Filter::eq("id", tx_id)])
            .await
            .map_err(|e| map_missing(e, || format!("{} transaction {tx_id}", flow.as_str())))?;
        Ok(row.into())
    }

    async fn list_for_account(
        &self,
        flow: CashFlow,
        user_id: &str,
        account_id: &str,
    ) -> Result<Vec<CashTransaction>> {
        let rows: Vec<CashTransactionRow> = self
            .client
            .select(
                table(flow),
                &[Self::owner(user_id), Filter::eq("account_id", account_id)],
                Some("created_at.desc"),
            )
            .await?;
        Ok(rows.into_iter().map(CashTransaction::from).collect())
    }

    async fn update_row(
        &self,
        flow: CashFlow,
        user_id: &str,
        update: CashTransactionUpdate,
    ) -> Result<CashTransaction> {
        let mut patch = serde_json::Map::new();
        if let Some(amount) = update.amount {
            patch.insert("amount".to_string(), json!(amount));
        }
        if let Some(category_id) = &update.category_id {
            patch.insert("category_id".to_string(), json!(category_id));
        }
        if let Some(description) = &update.description {
            patch.insert("description".to_string(), json!(description));
        }
        if patch.is_empty() {
            // Nothing to change; return the current row.
            return self.get_by_id(flow, user_id, &update.id).await;
        }
        let row: CashTransactionRow = self
            .client
            .update_one(
                table(flow),
                &[Self::owner(user_id), Filter::eq("id", &update.id)],
                &patch,
            )
            .await
            .map_err(|e| {
                map_missing(e, || format!("{} transaction {}", flow.as_str(), update.id))
            })?;
        Ok(row.into())
    }

    async fn delete(&self, flow: CashFlow, user_id: &str, tx_id: &str) -> Result<usize> {
        self.client
            .delete(table(flow), &[Self::owner(user_id), Filter::eq("id", tx_id)])
            .await
    }
}
