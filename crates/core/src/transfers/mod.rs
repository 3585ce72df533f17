pub mod transfers_model;
pub mod transfers_service;


pub use transfers_model::*;
pub use transfers_service::{TransferService, TransferServiceTrait};
