//! Part-related errors

use super::BundleError;

/// Creates a part validation failed error
pub fn validation_failed(message: impl Into<String>) -> BundleError {
    BundleError::PartValidationFailed {
        message: message.into(),
    }
}

/// Creates a duplicate part name error
pub fn duplicate_name(name: impl Into<String>) -> BundleError {
    BundleError::DuplicatePartName { name: name.into() }
}
