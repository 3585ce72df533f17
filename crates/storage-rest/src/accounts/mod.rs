//! Row-store implementation for funding accounts.

mod model;
mod repository;

pub use model::{FundingAccountRow, NewFundingAccountRow};
pub use repository::AccountRepository;
