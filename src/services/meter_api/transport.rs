
use crate::services::meter_api::headers::redacted;
use crate::services::meter_api::status::Status;
use crate::services::meter_api::status::unexpected_status_details::UnexpectedStatusDetails;
use anyhow::anyhow;
use async_trait::async_trait;
use log::{debug, error};
use reqwest::header::HeaderMap;
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl FromStr for HttpMethod {
    type Err = Status;

    fn from_str(method: &str) -> Result<Self, Self::Err> {
        match method.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "DELETE" => Ok(HttpMethod::Delete),
            _ => {
                error!("Unsupported http method {:?}, request not sent", method);
                Err(Status::UnsupportedOperation(method.to_string()))
            }
        }
    }
}

impl From<HttpMethod> for Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        }
    }
}

impl Display for HttpMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, url: Url, headers: HeaderMap) -> Self {
        ApiRequest {
            method,
            url,
            headers,
            body: None,
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Writes the request to the debug log with credentials redacted
    pub fn log(&self) {
        debug!("Url: {} {}", self.method, self.url);
        debug!("Headers: {:?}", redacted(&self.headers));
        debug!("Request Body: {}", self.body.as_deref().unwrap_or(""));
    }
}

#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub location: Option<String>,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        ApiResponse {
            status,
            location: None,
            body: body.into(),
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Any 2xx is good. Everything else is logged and becomes [`Status::UnexpectedStatus`].
    pub fn classify(self, method: HttpMethod, url: &Url) -> Result<ApiResponse, Status> {
        debug!("Response Body: {}", self.body);
        debug!("Status: {}", self.status);
        if self.is_success() {
            return Ok(self);
        }
        error!(
            method = method.to_string().as_str(),
            url = url.as_str(),
            status = self.status;
            "Got a {} for {} to {}", self.status, method, url);
        Err(Status::UnexpectedStatus(UnexpectedStatusDetails::new(
            method,
            url.to_string(),
            self.status,
        )))
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Status> {
        serde_json::from_str(&self.body)
            .map_err(|e| Status::MalformedResponse(anyhow!("Response body is not valid JSON: {}", e)))
    }
}

/// Issues a single request and waits for the whole response
#[async_trait]
pub trait Transport: Send + Sync {
    async fn request(&self, request: ApiRequest) -> Result<ApiResponse, Status>;
}
