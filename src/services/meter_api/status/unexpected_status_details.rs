use crate::services::meter_api::transport::HttpMethod;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub struct UnexpectedStatusDetails {
    pub method: HttpMethod,
    pub url: String,
    pub code: u16,
}

impl UnexpectedStatusDetails {
    pub fn new(method: HttpMethod, url: String, code: u16) -> Self {
        UnexpectedStatusDetails { method, url, code }
    }
}

impl Display for UnexpectedStatusDetails {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "got a {} for {} to {}", self.code, self.method, self.url)
    }
}
