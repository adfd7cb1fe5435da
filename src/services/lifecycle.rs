pub mod failure_policy;
pub mod meter_lifecycle;
pub mod tagging_report;
