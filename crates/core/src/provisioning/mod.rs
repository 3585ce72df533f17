pub mod provisioning_model;
pub mod provisioning_service;


pub use provisioning_model::*;
pub use provisioning_service::{ProvisioningService, ProvisioningServiceTrait};
