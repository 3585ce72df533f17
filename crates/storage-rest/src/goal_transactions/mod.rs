//! Row-store implementation for goal transactions.

mod model;
mod repository;

pub use model::{GoalTransactionRow, NewGoalTransactionRow};
pub use repository::GoalTransactionRepository;
