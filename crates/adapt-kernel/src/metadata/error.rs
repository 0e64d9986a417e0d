//! Errors raised when reading properties back out of a published record.

use thiserror::Error;

/// A published [`MetadataRecord`](super::MetadataRecord) holds a property of
/// an unexpected shape.
///
/// Records produced by [`to_record`](super::to_record) never trigger this;
/// it exists for collaborators that receive records from elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RecordError {
    /// The property exists but does not have the expected shape.
    #[error("property '{key}' is malformed: expected {expected}")]
    MalformedProperty {
        key: &'static str,
        expected: &'static str,
    },
}

impl RecordError {
    pub(crate) fn malformed(key: &'static str, expected: &'static str) -> Self {
        Self::MalformedProperty { key, expected }
    }
}
