//! Row-store implementation for cash (income/expense) transactions.

mod model;
mod repository;

pub use model::{CashTransactionRow, NewCashTransactionRow};
pub use repository::CashTransactionRepository;
