//! Model records and identifiers.

use super::{Modality, Status};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelId(String);

impl ModelId {
    /// Creates a new model ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ModelId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ModelId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// One entry in the diagnostic model catalog.
///
/// Everything except `enabled` is seed data and never changes after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelRecord {
    /// Unique identifier.
    pub id: ModelId,
    /// Display title.
    pub title: String,
    /// One-line description.
    pub description: String,
    /// Free-form version label, e.g. `v1.4`.
    pub version: String,
    /// Maturity status.
    pub status: Status,
    /// Input modality.
    pub modality: Modality,
    /// Ordered tags, shown as badges and matched by search.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Presentation key for card artwork (`brain`, `ecg`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artwork: Option<String>,
    /// Whether the model is switched on in the current session.
    #[serde(default)]
    pub enabled: bool,
}

impl ModelRecord {
    /// Creates a disabled record with no tags.
    #[must_use]
    pub fn new(
        id: impl Into<ModelId>,
        title: impl Into<String>,
        description: impl Into<String>,
        version: impl Into<String>,
        status: Status,
        modality: Modality,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            version: version.into(),
            status,
            modality,
            tags: Vec::new(),
            artwork: None,
            enabled: false,
        }
    }

    /// Sets the tags.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the artwork key.
    #[must_use]
    pub fn with_artwork(mut self, artwork: impl Into<String>) -> Self {
        self.artwork = Some(artwork.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_defaults_disabled() {
        let record = ModelRecord::new("7", "Title", "Desc", "v0.1", Status::Beta, Modality::Signal);
        assert!(!record.enabled);
        assert!(record.tags.is_empty());
        assert_eq!(record.id.as_str(), "7");
    }

    #[test]
    fn test_deserialize_optional_fields() {
        let json = r#"{
            "id": "x1",
            "title": "T",
            "description": "D",
            "version": "v1",
            "status": "stable",
            "modality": "Imaging"
        }"#;
        let record: ModelRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.status, Status::Stable);
        assert!(!record.enabled);
        assert!(record.artwork.is_none());
        assert!(record.tags.is_empty());
    }
}
