use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde_json::json;

use nestegg_core::accounts::{
    AccountRepositoryTrait, FundingAccount, FundingAccountUpdate, NewFundingAccount,
};
use nestegg_core::Result;

use super::model::{FundingAccountRow, NewFundingAccountRow};
use crate::client::{Filter, RestLedgerClient};
use crate::errors::map_missing;

const TABLE: &str = "funding_accounts";

pub struct AccountRepository {
    client: Arc<RestLedgerClient>,
}

impl AccountRepository {
    pub fn new(client: Arc<RestLedgerClient>) -> Self {
        AccountRepository { client }
    }

    fn owner(user_id: &str) -> Filter {
        Filter::eq("user_id", user_id)
    }
}

#[async_trait]
impl AccountRepositoryTrait for AccountRepository {
    async fn create(
        &self,
        user_id: &str,
        new_account: NewFundingAccount,
    ) -> Result<FundingAccount> {
        let row: FundingAccountRow = self
            .client
            .insert(TABLE, &NewFundingAccountRow::from_new(user_id, new_account))
            .await?;
        Ok(row.into())
    }

    async fn update(&self, user_id: &str, update: FundingAccountUpdate) -> Result<FundingAccount> {
        let row: FundingAccountRow = self
            .client
            .update_one(
                TABLE,
                &[Self::owner(user_id), Filter::eq("id", &update.id)],
                &json!({ "name": update.name }),
            )
            .await
            .map_err(|e| map_missing(e, || format!("Account {}", update.id)))?;
        Ok(row.into())
    }

    async fn delete(&self, user_id: &str, account_id: &str) -> Result<usize> {
        self.client
            .delete(TABLE, &[Self::owner(user_id), Filter::eq("id", account_id)])
            .await
    }

    async fn get_by_id(&self, user_id: &str, account_id: &str) -> Result<FundingAccount> {
        let row: FundingAccountRow = self
            .client
            .select_one(TABLE, &[Self::owner(user_id), Filter::eq("id", account_id)])
            .await
            .map_err(|e| map_missing(e, || format!("Account {account_id}")))?;
        Ok(row.into())
    }

    async fn list(&self, user_id: &str) -> Result<Vec<FundingAccount>> {
        let rows: Vec<FundingAccountRow> = self
            .client
            .select(TABLE, &[Self::owner(user_id)], Some("created_at.asc"))
            .await?;
        Ok(rows.into_iter().map(FundingAccount::from).collect())
    }

    async fn adjust_balance(
        &self,
        user_id: &str,
        account_id: &str,
        delta: Decimal,
    ) -> Result<FundingAccount> {
        let row: FundingAccountRow = self
            .client
            .rpc(
                "adjust_account_balance",
                &json!({
                    "p_user_id": user_id,
                    "p_account_id": account_id,
                    "p_delta": delta,
                }),
            )
            .await
            .map_err(|e| map_missing(e, || format!("Account {account_id}")))?;
        Ok(row.into())
    }
}
