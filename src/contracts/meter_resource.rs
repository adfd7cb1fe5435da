use std::fmt::{Display, Formatter};

/// Handle for the meter that monitors a host. The remote id is never stored here,
/// every operation that needs it resolves it by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeterResource {
    pub name: String,
}

impl MeterResource {
    pub fn new(name: impl Into<String>) -> Self {
        MeterResource { name: name.into() }
    }
}

impl Display for MeterResource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Opaque identifier assigned to a meter by the remote service
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MeterId(String);

impl MeterId {
    pub fn new(id: impl Into<String>) -> Self {
        MeterId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for MeterId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<MeterId> for String {
    fn from(id: MeterId) -> Self {
        id.0
    }
}
