
use crate::services::meter_api::status::Status;
use anyhow::anyhow;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};

/// Basic auth credentials: the API key is the user name, the password is empty
pub fn auth_encode(api_key: &str) -> String {
    BASE64.encode(format!("{}:", api_key)).trim().replace('\n', "")
}

/// Authorization and content type headers carried by every API call
pub fn generate_headers(api_key: &str) -> Result<HeaderMap, Status> {
    let mut authorization = HeaderValue::from_str(&format!("Basic {}", auth_encode(api_key)))
        .map_err(|e| Status::Configuration(anyhow!("API key cannot be sent as a header: {}", e)))?;
    authorization.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, authorization);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

/// Header pairs safe to write to logs
pub fn redacted(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            let printed = if value.is_sensitive() || name == AUTHORIZATION {
                "<redacted>".to_string()
            } else {
                value.to_str().unwrap_or("<binary>").to_string()
            };
            (name.to_string(), printed)
        })
        .collect()
}
