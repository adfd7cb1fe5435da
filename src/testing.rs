pub mod meter_lifecycle_context;
pub mod recording_audit_service;
pub mod recording_transport;
pub mod tls_test_server;
