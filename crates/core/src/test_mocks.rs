//! In-memory repository mocks shared by the service tests.
//!
//! Each mock keeps its rows behind a `Mutex` and supports targeted failure
//! injection so the saga/compensation paths can be exercised.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::accounts::{
    AccountRepositoryTrait, FundingAccount, FundingAccountUpdate, NewFundingAccount,
};
use crate::categories::{Category, CategoryKind, CategoryRepositoryTrait, CategoryUpdate, NewCategory};
use crate::errors::{DatabaseError, Error, Result};
use crate::goal_transactions::{
    GoalTransaction, GoalTransactionRepositoryTrait, NewGoalTransaction,
};
use crate::goals::{GoalRepositoryTrait, NewSavingsGoal, SavingsGoal, SavingsGoalUpdate};
use crate::settings::{
    NewUserSettings, SettingsRepositoryTrait, UserSettings, UserSettingsUpdate,
};
use crate::transactions::{
    CashFlow, CashTransaction, CashTransactionRepositoryTrait, CashTransactionUpdate,
    NewCashTransaction,
};

fn injected_failure() -> Error {
    Error::Database(DatabaseError::QueryFailed("injected store failure".to_string()))
}

// --- Accounts ---

#[derive(Default)]
pub struct MockAccountRepository {
    accounts: Mutex<Vec<FundingAccount>>,
    /// Per-account budget of successful `adjust_balance` calls; once spent,
    /// further adjustments fail with a store error.
    adjust_budget: Mutex<HashMap<String, usize>>,
}

impl MockAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, user_id: &str, account_id: &str, name: &str, balance: Decimal) {
        let now = Utc::now();
        self.accounts.lock().unwrap().push(FundingAccount {
            id: account_id.to_string(),
            user_id: user_id.to_string(),
            name: name.to_string(),
            balance,
            created_at: now,
            updated_at: now,
        });
    }

    /// Lets `allowed` adjustments through for `account_id`, then fails.
    pub fn fail_adjust_after(&self, account_id: &str, allowed: usize) {
        self.adjust_budget
            .lock()
            .unwrap()
            .insert(account_id.to_string(), allowed);
    }

    pub fn balance_of(&self, account_id: &str) -> Decimal {
        self.accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == account_id)
            .map(|a| a.balance)
            .unwrap_or_else(|| panic!("no account {account_id}"))
    }
}

#[async_trait]
impl AccountRepositoryTrait for MockAccountRepository {
    async fn create(
        &self,
        user_id: &str,
        new_account: NewFundingAccount,
    ) -> Result<FundingAccount> {
        let now = Utc::now();
        let account = FundingAccount {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            name: new_account.name,
            balance: new_account.balance,
            created_at: now,
            updated_at: now,
        };
        self.accounts.lock().unwrap().push(account.clone());
        Ok(account)
    }

    async fn update(&self, user_id: &str, update: FundingAccountUpdate) -> Result<FundingAccount> {
        let mut accounts = self.accounts.lock().unwrap();
        let account = accounts
            .iter_mut()
            .find(|a| a.user_id == user_id && a.id == update.id)
            .ok_or_else(|| Error::NotFound(format!("Account {}", update.id)))?;
        account.name = update.name;
        account.updated_at = Utc::now();
        Ok(account.clone())
    }

    async fn delete(&self, user_id: &str, account_id: &str) -> Result<usize> {
        let mut accounts = self.accounts.lock().unwrap();
        let before = accounts.len();
        accounts.retain(|a| !(a.user_id == user_id && a.id == account_id));
        Ok(before - accounts.len())
    }

    async fn get_by_id(&self, user_id: &str, account_id: &str) -> Result<FundingAccount> {
        self.accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.user_id == user_id && a.id == account_id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("Account {account_id}")))
    }

    async fn list(&self, user_id: &str) -> Result<Vec<FundingAccount>> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn adjust_balance(
        &self,
        user_id: &str,
        account_id: &str,
        delta: Decimal,
    ) -> Result<FundingAccount> {
        {
            let mut budget = self.adjust_budget.lock().unwrap();
            if let Some(remaining) = budget.get_mut(account_id) {
                if *remaining == 0 {
                    return Err(injected_failure());
                }
                *remaining -= 1;
            }
        }
        let mut accounts = self.accounts.lock().unwrap();
        let account = accounts
            .iter_mut()
            .find(|a| a.user_id == user_id && a.id == account_id)
            .ok_or_else(|| Error::NotFound(format!("Account {account_id}")))?;
        account.balance += delta;
        account.updated_at = Utc::now();
        Ok(account.clone())
    }
}

// --- Goals ---

#[derive(Default)]
pub struct MockGoalRepository {
    goals: Mutex<Vec<SavingsGoal>>,
}

impl MockGoalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, user_id: &str, goal_id: &str, target: Decimal, current: Decimal) {
        let now = Utc::now();
        let today = now.date_naive();
        self.goals.lock().unwrap().push(SavingsGoal {
            id: goal_id.to_string(),
            user_id: user_id.to_string(),
            name: format!("Goal {goal_id}"),
            target_amount: target,
            initial_amount: current,
            current_amount: current,
            start_date: today,
            end_date: today,
            image_url: None,
            created_at: now,
            updated_at: now,
        });
    }

    pub fn current_amount_of(&self, goal_id: &str) -> Decimal {
        self.goals
            .lock()
            .unwrap()
            .iter()
            .find(|g| g.id == goal_id)
            .map(|g| g.current_amount)
            .unwrap_or_else(|| panic!("no goal {goal_id}"))
    }
}

#[async_trait]
impl GoalRepositoryTrait for MockGoalRepository {
    async fn create(&self, user_id: &str, new_goal: NewSavingsGoal) -> Result<SavingsGoal> {
        let now = Utc::now();
        let goal = SavingsGoal {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            name: new_goal.name,
            target_amount: new_goal.target_amount,
            initial_amount: new_goal.initial_amount,
            current_amount: new_goal.initial_amount,
            start_date: new_goal.start_date,
            end_date: new_goal.end_date,
            image_url: new_goal.image_url,
            created_at: now,
            updated_at: now,
        };
        self.goals.lock().unwrap().push(goal.clone());
        Ok(goal)
    }

    async fn update(&self, user_id: &str, update: SavingsGoalUpdate) -> Result<SavingsGoal> {
        let mut goals = self.goals.lock().unwrap();
        let goal = goals
            .iter_mut()
            .find(|g| g.user_id == user_id && g.id == update.id)
            .ok_or_else(|| Error::NotFound(format!("Goal {}", update.id)))?;
        goal.name = update.name;
        goal.target_amount = update.target_amount;
        goal.start_date = update.start_date;
        goal.end_date = update.end_date;
        goal.image_url = update.image_url;
        goal.updated_at = Utc::now();
        Ok(goal.clone())
    }

    async fn delete(&self, user_id: &str, goal_id: &str) -> Result<usize> {
        let mut goals = self.goals.lock().unwrap();
        let before = goals.len();
        goals.retain(|g| !(g.user_id == user_id && g.id == goal_id));
        Ok(before - goals.len())
    }

    async fn get_by_id(&self, user_id: &str, goal_id: &str) -> Result<SavingsGoal> {
        self.goals
            .lock()
            .unwrap()
            .iter()
            .find(|g| g.user_id == user_id && g.id == goal_id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("Goal {goal_id}")))
    }

    async fn list(&self, user_id: &str) -> Result<Vec<SavingsGoal>> {
        Ok(self
            .goals
            .lock()
            .unwrap()
            .iter()
            .filter(|g| g.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn adjust_current_amount(
        &self,
        user_id: &str,
        goal_id: &str,
        delta: Decimal,
    ) -> Result<SavingsGoal> {
        let mut goals = self.goals.lock().unwrap();
        let goal = goals
            .iter_mut()
            .find(|g| g.user_id == user_id && g.id == goal_id)
            .ok_or_else(|| Error::NotFound(format!("Goal {goal_id}")))?;
        goal.current_amount += delta;
        goal.updated_at = Utc::now();
        Ok(goal.clone())
    }
}

// --- Goal transactions ---

#[derive(Default)]
pub struct MockGoalTransactionRepository {
    rows: Mutex<Vec<GoalTransaction>>,
    fail_insert: Mutex<bool>,
}

impl MockGoalTransactionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_inserts(&self) {
        *self.fail_insert.lock().unwrap() = true;
    }

    pub fn rows(&self) -> Vec<GoalTransaction> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl GoalTransactionRepositoryTrait for MockGoalTransactionRepository {
    async fn insert(&self, _user_id: &str, new_tx: NewGoalTransaction) -> Result<GoalTransaction> {
        if *self.fail_insert.lock().unwrap() {
            return Err(injected_failure());
        }
        let tx = GoalTransaction {
            id: Uuid::new_v4().to_string(),
            goal_id: new_tx.goal_id,
            account_id: new_tx.account_id,
            amount: new_tx.amount,
            kind: new_tx.kind,
            description: new_tx.description,
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().push(tx.clone());
        Ok(tx)
    }

    async fn get_by_id(&self, _user_id: &str, tx_id: &str) -> Result<GoalTransaction> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == tx_id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("Goal transaction {tx_id}")))
    }

    async fn list_for_goal(&self, _user_id: &str, goal_id: &str) -> Result<Vec<GoalTransaction>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.goal_id.as_deref() == Some(goal_id))
            .cloned()
            .collect())
    }

    async fn list_for_account(
        &self,
        _user_id: &str,
        account_id: &str,
    ) -> Result<Vec<GoalTransaction>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.account_id == account_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, _user_id: &str, tx_id: &str) -> Result<usize> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|t| t.id != tx_id);
        Ok(before - rows.len())
    }
}

// --- Cash transactions ---

#[derive(Default)]
pub struct MockCashTransactionRepository {
    rows: Mutex<Vec<(CashFlow, CashTransaction)>>,
}

impl MockCashTransactionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self, flow: CashFlow) -> Vec<CashTransaction> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .filter(|(f, _)| *f == flow)
            .map(|(_, t)| t.clone())
            .collect()
    }
}

#[async_trait]
impl CashTransactionRepositoryTrait for MockCashTransactionRepository {
    async fn insert(
        &self,
        flow: CashFlow,
        _user_id: &str,
        new_tx: NewCashTransaction,
    ) -> Result<CashTransaction> {
        let tx = CashTransaction {
            id: Uuid::new_v4().to_string(),
            account_id: new_tx.account_id,
            category_id: new_tx.category_id,
            amount: new_tx.amount,
            description: new_tx.description,
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().push((flow, tx.clone()));
        Ok(tx)
    }

    async fn get_by_id(
        &self,
        flow: CashFlow,
        _user_id: &str,
        tx_id: &str,
    ) -> Result<CashTransaction> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|(f, t)| *f == flow && t.id == tx_id)
            .map(|(_, t)| t.clone())
            .ok_or_else(|| Error::NotFound(format!("{} transaction {tx_id}", flow.as_str())))
    }

    async fn list_for_account(
        &self,
        flow: CashFlow,
        _user_id: &str,
        account_id: &str,
    ) -> Result<Vec<CashTransaction>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|(f, t)| *f == flow && t.account_id == account_id)
            .map(|(_, t)| t.clone())
            .collect())
    }

    async fn update_row(
        &self,
        flow: CashFlow,
        _user_id: &str,
        update: CashTransactionUpdate,
    ) -> Result<CashTransaction> {
        let mut rows = self.rows.lock().unwrap();
        let (_, tx) = rows
            .iter_mut()
            .find(|(f, t)| *f == flow && t.id == update.id)
            .ok_or_else(|| Error::NotFound(format!("{} transaction {}", flow.as_str(), update.id)))?;
        if let Some(amount) = update.amount {
            tx.amount = amount;
        }
        if let Some(category_id) = update.category_id {
            tx.category_id = Some(category_id);
        }
        if let Some(description) = update.description {
            tx.description = Some(description);
        }
        Ok(tx.clone())
    }

    async fn delete(&self, flow: CashFlow, _user_id: &str, tx_id: &str) -> Result<usize> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|(f, t)| !(*f == flow && t.id == tx_id));
        Ok(before - rows.len())
    }
}

// --- Categories ---

#[derive(Default)]
pub struct MockCategoryRepository {
    categories: Mutex<Vec<(CategoryKind, Category)>>,
}

impl MockCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CategoryRepositoryTrait for MockCategoryRepository {
    async fn create(
        &self,
        kind: CategoryKind,
        user_id: &str,
        new_category: NewCategory,
    ) -> Result<Category> {
        let mut categories = self.categories.lock().unwrap();
        if categories
            .iter()
            .any(|(k, c)| *k == kind && c.user_id == user_id && c.name == new_category.name)
        {
            return Err(Error::Database(DatabaseError::UniqueViolation(format!(
                "duplicate category name {}",
                new_category.name
            ))));
        }
        let category = Category {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            name: new_category.name,
            is_fixed: new_category.is_fixed,
            created_at: Utc::now(),
        };
        categories.push((kind, category.clone()));
        Ok(category)
    }

    async fn update(
        &self,
        kind: CategoryKind,
        user_id: &str,
        update: CategoryUpdate,
    ) -> Result<Category> {
        let mut categories = self.categories.lock().unwrap();
        let (_, category) = categories
            .iter_mut()
            .find(|(k, c)| *k == kind && c.user_id == user_id && c.id == update.id)
            .ok_or_else(|| Error::NotFound(format!("Category {}", update.id)))?;
        category.name = update.name;
        category.is_fixed = update.is_fixed;
        Ok(category.clone())
    }

    async fn delete(&self, kind: CategoryKind, user_id: &str, category_id: &str) -> Result<usize> {
        let mut categories = self.categories.lock().unwrap();
        let before = categories.len();
        categories.retain(|(k, c)| !(*k == kind && c.user_id == user_id && c.id == category_id));
        Ok(before - categories.len())
    }

    async fn get_by_id(
        &self,
        kind: CategoryKind,
        user_id: &str,
        category_id: &str,
    ) -> Result<Category> {
        self.categories
            .lock()
            .unwrap()
            .iter()
            .find(|(k, c)| *k == kind && c.user_id == user_id && c.id == category_id)
            .map(|(_, c)| c.clone())
            .ok_or_else(|| Error::NotFound(format!("Category {category_id}")))
    }

    async fn list(&self, kind: CategoryKind, user_id: &str) -> Result<Vec<Category>> {
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .filter(|(k, c)| *k == kind && c.user_id == user_id)
            .map(|(_, c)| c.clone())
            .collect())
    }
}

// --- Settings ---

#[derive(Default)]
pub struct MockSettingsRepository {
    rows: Mutex<Vec<UserSettings>>,
    /// When set, the next insert fails with a unique violation after first
    /// storing this row, simulating a concurrent first read winning the race.
    conflict_row: Mutex<Option<UserSettings>>,
    insert_count: Mutex<usize>,
}

impl MockSettingsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, settings: UserSettings) {
        self.rows.lock().unwrap().push(settings);
    }

    pub fn conflict_with(&self, settings: UserSettings) {
        *self.conflict_row.lock().unwrap() = Some(settings);
    }

    pub fn insert_count(&self) -> usize {
        *self.insert_count.lock().unwrap()
    }

    pub fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl SettingsRepositoryTrait for MockSettingsRepository {
    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<UserSettings>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.user_id == user_id)
            .cloned())
    }

    async fn insert(&self, new_settings: NewUserSettings) -> Result<UserSettings> {
        *self.insert_count.lock().unwrap() += 1;
        if let Some(winner) = self.conflict_row.lock().unwrap().take() {
            self.rows.lock().unwrap().push(winner);
            return Err(Error::Database(DatabaseError::UniqueViolation(
                "user_settings_user_id_key".to_string(),
            )));
        }
        let settings = UserSettings {
            id: Uuid::new_v4().to_string(),
            user_id: new_settings.user_id,
            base_currency: new_settings.base_currency,
            saving_percentage: new_settings.saving_percentage,
            budget_period: new_settings.budget_period,
            monthly_income_target: new_settings.monthly_income_target,
            monthly_expense_budget: new_settings.monthly_expense_budget,
            auto_save_enabled: new_settings.auto_save_enabled,
            savings_account_id: new_settings.savings_account_id,
        };
        self.rows.lock().unwrap().push(settings.clone());
        Ok(settings)
    }

    async fn update(&self, user_id: &str, update: UserSettingsUpdate) -> Result<UserSettings> {
        let mut rows = self.rows.lock().unwrap();
        let settings = rows
            .iter_mut()
            .find(|s| s.user_id == user_id)
            .ok_or_else(|| Error::NotFound(format!("Settings for user {user_id}")))?;
        if let Some(currency) = update.base_currency {
            settings.base_currency = currency;
        }
        if let Some(pct) = update.saving_percentage {
            settings.saving_percentage = pct;
        }
        if let Some(period) = update.budget_period {
            settings.budget_period = period;
        }
        if let Some(target) = update.monthly_income_target {
            settings.monthly_income_target = Some(target);
        }
        if let Some(budget) = update.monthly_expense_budget {
            settings.monthly_expense_budget = Some(budget);
        }
        if let Some(enabled) = update.auto_save_enabled {
            settings.auto_save_enabled = enabled;
        }
        if let Some(account_id) = update.savings_account_id {
            settings.savings_account_id = Some(account_id);
        }
        Ok(settings.clone())
    }
}
