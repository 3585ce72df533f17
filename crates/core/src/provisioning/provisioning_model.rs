//! User provisioning configuration.
//!
//! The entities seeded for a new user are an explicit configuration structure
//! passed into the provisioning operation, not constants baked into the
//! account-creation flow.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An expense category to seed, with its recurring-cost flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultExpenseCategory {
    pub name: String,
    pub is_fixed: bool,
}

/// A funding account to seed with an opening balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultAccount {
    pub name: String,
    pub balance: Decimal,
}

/// Everything a freshly signed-up user starts with.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisioningDefaults {
    pub default_income_categories: Vec<String>,
    pub default_expense_categories: Vec<DefaultExpenseCategory>,
    pub default_accounts: Vec<DefaultAccount>,
}

impl Default for ProvisioningDefaults {
    fn default() -> Self {
        let expense = |name: &str, is_fixed: bool| DefaultExpenseCategory {
            name: name.to_string(),
            is_fixed,
        };
        ProvisioningDefaults {
            default_income_categories: ["Salary", "Freelance", "Other"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            default_expense_categories: vec![
                expense("Rent", true),
                expense("Utilities", true),
                expense("Groceries", false),
                expense("Transport", false),
                expense("Entertainment", false),
                expense("Other", false),
            ],
            default_accounts: vec![DefaultAccount {
                name: "Main".to_string(),
                balance: Decimal::ZERO,
            }],
        }
    }
}
