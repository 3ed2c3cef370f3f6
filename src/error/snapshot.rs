//! Snapshot encoding/decoding errors

use super::BundleError;

/// Creates a snapshot parse failed error
pub fn parse_failed(format: impl Into<String>, reason: impl Into<String>) -> BundleError {
    BundleError::SnapshotParseFailed {
        format: format.into(),
        reason: reason.into(),
    }
}

/// Creates a snapshot write failed error
pub fn write_failed(format: impl Into<String>, reason: impl Into<String>) -> BundleError {
    BundleError::SnapshotWriteFailed {
        format: format.into(),
        reason: reason.into(),
    }
}
