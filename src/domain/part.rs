//! Part domain type
//!
//! A named, typed record holding an opaque payload and its creation time.

use serde::{Deserialize, Serialize};

use crate::error::{Result, part_validation_failed};

/// A single entry in a bundle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part<T = serde_json::Value> {
    /// Part name, unique within a bundle. `None` (or empty) for anonymous parts
    #[serde(default)]
    pub name: Option<String>,

    /// Category label (e.g. "header", "attachment")
    #[serde(rename = "type")]
    pub part_type: String,

    /// Opaque payload
    pub data: T,

    /// Milliseconds since the Unix epoch at insertion
    created_at: i64,
}

impl<T> Part<T> {
    /// Create a part with an explicit creation timestamp
    ///
    /// Bundles stamp parts themselves on `add_part`; this is for seeding a
    /// bundle through `set_parts`.
    pub fn new(
        name: Option<impl Into<String>>,
        part_type: impl Into<String>,
        data: T,
        created_at: i64,
    ) -> Self {
        Self {
            name: name.map(Into::into),
            part_type: part_type.into(),
            data,
            created_at,
        }
    }

    /// Shorthand for a named part
    pub fn named(
        name: impl Into<String>,
        part_type: impl Into<String>,
        data: T,
        created_at: i64,
    ) -> Self {
        Self::new(Some(name), part_type, data, created_at)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn part_type(&self) -> &str {
        &self.part_type
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    /// Creation timestamp in milliseconds since the Unix epoch
    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    /// Whether the part has no usable name
    pub fn is_anonymous(&self) -> bool {
        self.name.as_deref().is_none_or(str::is_empty)
    }

    /// Whether the part's name is exactly `name`
    pub(crate) fn has_name(&self, name: &str) -> bool {
        self.name.as_deref() == Some(name)
    }

    pub fn validate(&self) -> Result<()> {
        if self.part_type.is_empty() {
            return Err(part_validation_failed(format!(
                "Part type cannot be empty (part '{}')",
                self.name().unwrap_or("<anonymous>")
            )));
        }
        Ok(())
    }
}
