//! Row-store implementation for income and expense categories.

mod model;
mod repository;

pub use model::{CategoryRow, NewCategoryRow};
pub use repository::CategoryRepository;
