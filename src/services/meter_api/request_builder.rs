
use crate::contracts::meter_resource::{MeterId, MeterResource};
use crate::services::meter_api::status::Status;
use anyhow::anyhow;
use reqwest::Url;
use std::fmt::{Display, Formatter};

/// Location of an organization on the API host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub hostname: String,
    pub org_id: String,
}

impl Endpoint {
    pub fn new(hostname: impl Into<String>, org_id: impl Into<String>) -> Self {
        Endpoint {
            hostname: hostname.into(),
            org_id: org_id.into(),
        }
    }

    /// `https://{hostname}/{org_id}`
    pub fn base_url(&self) -> Result<Url, Status> {
        let mut url = Url::parse(&format!("https://{}/", self.hostname))
            .map_err(|e| Status::Configuration(anyhow!("Invalid API hostname {:?}: {}", self.hostname, e)))?;
        url.path_segments_mut()
            .map_err(|_| Status::Configuration(anyhow!("API hostname {:?} cannot be a base", self.hostname)))?
            .pop_if_empty()
            .push(&self.org_id);
        Ok(url)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Search,
    MeterDetail,
    Certificates,
    Delete,
    Tags,
    Annotate,
}

impl Action {
    /// Whether the url for this action embeds the remote meter id
    pub fn requires_meter_id(&self) -> bool {
        matches!(
            self,
            Action::MeterDetail | Action::Certificates | Action::Delete | Action::Tags
        )
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Action::Create => "create",
            Action::Search => "search",
            Action::MeterDetail => "meter",
            Action::Certificates => "certificates",
            Action::Delete => "delete",
            Action::Tags => "tags",
            Action::Annotate => "annotate",
        };
        write!(f, "{}", name)
    }
}

/// Builds API urls. Never performs I/O: actions that need a meter id take it resolved.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    endpoint: Endpoint,
}

impl RequestBuilder {
    pub fn new(endpoint: Endpoint) -> Self {
        RequestBuilder { endpoint }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn build_url(&self, meter: &MeterResource, action: Action, meter_id: Option<&MeterId>) -> Result<Url, Status> {
        match action {
            Action::Create => self.url_from_segments(&["meters"]),
            Action::Search => {
                let mut url = self.url_from_segments(&["meters"])?;
                url.query_pairs_mut().append_pair("name", &meter.name);
                Ok(url)
            }
            Action::Annotate => self.annotations_url(),
            // The certificates url points at the meter document itself
            Action::MeterDetail | Action::Certificates | Action::Delete => {
                let meter_id = Self::require_meter_id(action, meter_id)?;
                self.url_from_segments(&["meters", meter_id.as_str()])
            }
            Action::Tags => {
                let meter_id = Self::require_meter_id(action, meter_id)?;
                self.url_from_segments(&["meters", meter_id.as_str(), "tags"])
            }
        }
    }

    /// Annotations belong to the organization, not to a meter
    pub fn annotations_url(&self) -> Result<Url, Status> {
        self.url_from_segments(&["annotations"])
    }

    /// `{base}/meters/{id}/tags/{tag}`, the tag is escaped as a single path segment
    pub fn tag_url(&self, meter_id: &MeterId, tag: &str) -> Result<Url, Status> {
        self.url_from_segments(&["meters", meter_id.as_str(), "tags", tag])
    }

    fn require_meter_id(action: Action, meter_id: Option<&MeterId>) -> Result<&MeterId, Status> {
        meter_id.ok_or(Status::MissingMeterId(action))
    }

    fn url_from_segments(&self, segments: &[&str]) -> Result<Url, Status> {
        let mut url = self.endpoint.base_url()?;
        url.path_segments_mut()
            .map_err(|_| Status::Configuration(anyhow!("API hostname {:?} cannot be a base", self.endpoint.hostname)))?
            .extend(segments);
        Ok(url)
    }
}
