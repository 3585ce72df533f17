use log::{error, warn};
use std::sync::Arc;

use super::transfers_model::{TransferOutcome, TransferRequest};
use crate::accounts::AccountRepositoryTrait;
use crate::errors::{Error, Result, TransferError};
use crate::goal_transactions::{
    GoalTransactionKind, GoalTransactionRepositoryTrait, NewGoalTransaction,
};

/// Trait for the account-to-account transfer operation.
#[async_trait::async_trait]
pub trait TransferServiceTrait: Send + Sync {
    async fn create_account_transfer(
        &self,
        user_id: &str,
        request: TransferRequest,
    ) -> Result<TransferOutcome>;
}

/// Service moving money between two funding accounts.
///
/// The store has no multi-row transactions, so the transfer runs as an
/// ordered saga: debit, credit, log. The credit step carries a compensating
/// action (re-credit the source); the log step is non-fatal because the money
/// movement has already completed.
pub struct TransferService {
    account_repository: Arc<dyn AccountRepositoryTrait>,
    goal_tx_repository: Arc<dyn GoalTransactionRepositoryTrait>,
}

impl TransferService {
    pub fn new(
        account_repository: Arc<dyn AccountRepositoryTrait>,
        goal_tx_repository: Arc<dyn GoalTransactionRepositoryTrait>,
    ) -> Self {
        Self {
            account_repository,
            goal_tx_repository,
        }
    }
}

#[async_trait::async_trait]
impl TransferServiceTrait for TransferService {
    async fn create_account_transfer(
        &self,
        user_id: &str,
        request: TransferRequest,
    ) -> Result<TransferOutcome> {
        request.validate()?;

        // Fail-fast checks before any mutation.
        let from_account = self
            .account_repository
            .get_by_id(user_id, &request.from_account_id)
            .await?;
        if from_account.balance < request.amount {
            return Err(Error::InsufficientFunds {
                available: from_account.balance,
                requested: request.amount,
            });
        }
        let to_account = self
            .account_repository
            .get_by_id(user_id, &request.to_account_id)
            .await?;

        let debited = self
            .account_repository
            .adjust_balance(user_id, &request.from_account_id, -request.amount)
            .await?;

        let credited = match self
            .account_repository
            .adjust_balance(user_id, &request.to_account_id, request.amount)
            .await
        {
            Ok(account) => account,
            Err(credit_err) => {
                // Compensate: put the debited amount back. Best effort; if
                // this also fails the source is left debited with no matching
                // credit and needs out-of-band reconciliation.
                match self
                    .account_repository
                    .adjust_balance(user_id, &request.from_account_id, request.amount)
                    .await
                {
                    Ok(_) => {
                        warn!(
                            "Transfer credit to {} failed, debit on {} compensated: {credit_err}",
                            request.to_account_id, request.from_account_id
                        );
                        return Err(Error::Transfer(TransferError::CreditFailed(
                            credit_err.to_string(),
                        )));
                    }
                    Err(comp_err) => {
                        error!(
                            "FATAL: transfer credit to {} failed ({credit_err}) and \
                             compensation of {} also failed ({comp_err}); manual \
                             reconciliation required",
                            request.to_account_id, request.from_account_id
                        );
                        return Err(Error::Transfer(TransferError::CompensationFailed {
                            credit: credit_err.to_string(),
                            compensation: comp_err.to_string(),
                        }));
                    }
                }
            }
        };

        // The transfer itself has succeeded; the log row is bookkeeping.
        let description = request
            .description
            .clone()
            .unwrap_or_else(|| format!("Transfer to {}", to_account.name));
        let log_row = NewGoalTransaction {
            goal_id: None,
            account_id: request.from_account_id.clone(),
            amount: request.amount,
            kind: GoalTransactionKind::Transfer,
            description: Some(description),
        };
        if let Err(log_err) = self.goal_tx_repository.insert(user_id, log_row).await {
            warn!(
                "Transfer from {} to {} succeeded but logging failed: {log_err}",
                request.from_account_id, request.to_account_id
            );
        }

        Ok(TransferOutcome {
            from_account: debited,
            to_account: credited,
        })
    }
}
