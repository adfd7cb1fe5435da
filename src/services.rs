pub mod audit;
pub mod backends;
pub mod base;
pub mod lifecycle;
pub mod meter_api;
pub mod observability;
pub mod provisioner;
pub mod tag_extraction;
