
#[cfg(test)]
mod test_certificates;

use crate::configuration::models::api_settings::ApiSettings;
use crate::services::meter_api::status::Status;
use crate::services::meter_api::transport::{ApiRequest, ApiResponse, Transport};
use anyhow::anyhow;
use async_trait::async_trait;
use log::{debug, error};
use reqwest::header::LOCATION;
use reqwest::tls::Certificate;
use reqwest::Client;
use std::path::Path;
use std::time::Duration;

/// Transport over HTTPS. The server certificate must chain to the configured CA bundle,
/// the platform trust store is not consulted.
pub struct HttpsTransport {
    client: Client,
}

impl HttpsTransport {
    pub async fn new(ca_bundle_path: &Path, timeout: Duration) -> Result<Self, Status> {
        debug!("Loading CA bundle from {:?}", ca_bundle_path);
        let bundle = tokio::fs::read(ca_bundle_path)
            .await
            .map_err(|e| Status::Configuration(anyhow!("Failed to read CA bundle {:?}: {}", ca_bundle_path, e)))?;
        let certificates = Certificate::from_pem_bundle(&bundle)
            .map_err(|e| Status::Configuration(anyhow!("CA bundle {:?} is not valid PEM: {}", ca_bundle_path, e)))?;
        if certificates.is_empty() {
            return Err(Status::Configuration(anyhow!(
                "CA bundle {:?} contains no certificates",
                ca_bundle_path
            )));
        }

        let mut client_builder = Client::builder()
            .https_only(true)
            .tls_built_in_root_certs(false)
            .timeout(timeout);
        for certificate in certificates {
            client_builder = client_builder.add_root_certificate(certificate);
        }

        let client = client_builder
            .build()
            .map_err(|e| Status::Configuration(anyhow!("Failed to construct HTTPS client: {}", e)))?;
        Ok(HttpsTransport { client })
    }

    pub async fn from_settings(settings: &ApiSettings) -> Result<Self, Status> {
        Self::new(&settings.ca_bundle_path, settings.request_timeout()).await
    }
}

#[async_trait]
impl Transport for HttpsTransport {
    async fn request(&self, request: ApiRequest) -> Result<ApiResponse, Status> {
        request.log();
        let ApiRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let mut builder = self.client.request(method.into(), url.clone()).headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            error!("Request {} to {} failed: {}", method, url, e);
            Status::from(e)
        })?;

        let status = response.status().as_u16();
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.text().await?;

        ApiResponse { status, location, body }.classify(method, &url)
    }
}
