//! Row-store implementation for savings goals.

mod model;
mod repository;

pub use model::{NewSavingsGoalRow, SavingsGoalRow};
pub use repository::GoalRepository;
