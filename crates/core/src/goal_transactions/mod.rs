pub mod goal_transactions_model;
pub mod goal_transactions_service;
pub mod goal_transactions_traits;

#[cfg(test)]
mod goal_transactions_service_tests;

pub use goal_transactions_model::*;
pub use goal_transactions_service::GoalTransactionService;
pub use goal_transactions_traits::{GoalTransactionRepositoryTrait, GoalTransactionServiceTrait};
