pub mod headers;
pub mod https_transport;
pub mod request_builder;
pub mod status;
pub mod transport;
