
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Annotation content before it is stamped with a time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationRequest {
    pub annotation_type: String,
    pub subtype: String,
    pub tags: Vec<String>,
}

impl AnnotationRequest {
    pub fn new(annotation_type: impl Into<String>, subtype: impl Into<String>, tags: Vec<String>) -> Self {
        AnnotationRequest {
            annotation_type: annotation_type.into(),
            subtype: subtype.into(),
            tags,
        }
    }

    /// Stamps the annotation. Start and end are the same instant, durations are not tracked.
    pub fn at(self, now: DateTime<Utc>) -> Annotation {
        Annotation {
            annotation_type: self.annotation_type,
            subtype: self.subtype,
            start_time: now,
            end_time: now,
            tags: self.tags,
        }
    }
}

/// The body posted to the annotations endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    #[serde(rename = "type")]
    pub annotation_type: String,
    pub subtype: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub end_time: DateTime<Utc>,
    pub tags: Vec<String>,
}
