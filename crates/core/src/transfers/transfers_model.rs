//! Account-to-account transfer models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::accounts::FundingAccount;
use crate::errors::{Error, Result, ValidationError};

/// Request to move `amount` between two funding accounts of the same user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub from_account_id: String,
    pub to_account_id: String,
    pub amount: Decimal,
    pub description: Option<String>,
}

impl TransferRequest {
    /// Validates the transfer request data.
    pub fn validate(&self) -> Result<()> {
        if self.from_account_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "fromAccountId".to_string(),
            )));
        }
        if self.to_account_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "toAccountId".to_string(),
            )));
        }
        if self.from_account_id == self.to_account_id {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Source and destination accounts must differ".to_string(),
            )));
        }
        if self.amount <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Amount must be positive".to_string(),
            )));
        }
        Ok(())
    }
}

/// Both accounts as they stand after a successful transfer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferOutcome {
    pub from_account: FundingAccount,
    pub to_account: FundingAccount,
}
