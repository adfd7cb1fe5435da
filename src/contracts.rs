pub mod annotation;
pub mod meter_resource;
pub mod platform_metadata;
