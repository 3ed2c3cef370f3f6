//! Error types and handling for partbundle
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Bundle operations themselves never fail; errors only come out of
//! validation and snapshot encoding/decoding. Sub-modules by error domain:
//! - [`part`]: Part validation errors
//! - [`snapshot`]: Snapshot encoding/decoding errors

pub mod part;
pub mod snapshot;

pub use part::{duplicate_name, validation_failed as part_validation_failed};
pub use snapshot::{parse_failed as snapshot_parse_failed, write_failed as snapshot_write_failed};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for partbundle operations
#[derive(Error, Diagnostic, Debug)]
pub enum BundleError {
    // Part errors
    #[error("Part validation failed: {message}")]
    #[diagnostic(code(partbundle::part::validation_failed))]
    PartValidationFailed { message: String },

    #[error("Duplicate part name '{name}'")]
    #[diagnostic(
        code(partbundle::part::duplicate_name),
        help("Part names must be unique within a bundle; remove or rename one of the parts")
    )]
    DuplicatePartName { name: String },

    // Snapshot errors
    #[error("Failed to parse {format} snapshot: {reason}")]
    #[diagnostic(
        code(partbundle::snapshot::parse_failed),
        help("A snapshot is an object with a `parts` list of name/type/data/createdAt records")
    )]
    SnapshotParseFailed { format: String, reason: String },

    #[error("Failed to write {format} snapshot: {reason}")]
    #[diagnostic(code(partbundle::snapshot::write_failed))]
    SnapshotWriteFailed { format: String, reason: String },
}

impl From<serde_json::Error> for BundleError {
    fn from(err: serde_json::Error) -> Self {
        BundleError::SnapshotParseFailed {
            format: "JSON".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for BundleError {
    fn from(err: serde_yaml::Error) -> Self {
        BundleError::SnapshotParseFailed {
            format: "YAML".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, BundleError>;
