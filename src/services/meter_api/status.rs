pub mod not_found_details;
pub mod unexpected_status_details;

use crate::services::meter_api::request_builder::Action;
use crate::services::meter_api::status::not_found_details::NotFoundDetails;
use crate::services::meter_api::status::unexpected_status_details::UnexpectedStatusDetails;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// The error type for meter API operations.
/// Callers decide from [`Status::kind`] whether a failure ends the run.
#[derive(Debug)]
pub enum Status {
    Transport(anyhow::Error),
    UnexpectedStatus(UnexpectedStatusDetails),
    MeterNotFound(NotFoundDetails),
    MalformedResponse(anyhow::Error),
    UnsupportedOperation(String),
    MissingMeterId(Action),
    Configuration(anyhow::Error),
    State(anyhow::Error),
}

/// Coarse classification of a [`Status`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    TransportFailure,
    NotFound,
    MalformedResponse,
    UnsupportedOperation,
    Configuration,
    State,
}

impl Status {
    pub fn kind(&self) -> FailureKind {
        match self {
            Status::Transport(_) | Status::UnexpectedStatus(_) => FailureKind::TransportFailure,
            Status::MeterNotFound(_) => FailureKind::NotFound,
            Status::MalformedResponse(_) => FailureKind::MalformedResponse,
            Status::UnsupportedOperation(_) => FailureKind::UnsupportedOperation,
            Status::MissingMeterId(_) | Status::Configuration(_) => FailureKind::Configuration,
            Status::State(_) => FailureKind::State,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Status::MeterNotFound(_))
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            Status::UnexpectedStatus(details) => Some(details.code),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Status {
    fn from(error: reqwest::Error) -> Self {
        Status::Transport(error.into())
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Transport(e) => write!(f, "Transport error occurred: {}", e),
            Status::UnexpectedStatus(details) => write!(f, "Unexpected response: {}", details),
            Status::MeterNotFound(details) => write!(f, "Meter not found: {}", details),
            Status::MalformedResponse(cause) => write!(f, "Malformed response: {}", cause),
            Status::UnsupportedOperation(method) => write!(f, "Unsupported http method: {}", method),
            Status::MissingMeterId(action) => write!(f, "A meter id is required to build the {} url", action),
            Status::Configuration(cause) => write!(f, "Configuration error: {}", cause),
            Status::State(cause) => write!(f, "State store error: {}", cause),
        }
    }
}

impl Error for Status {}
