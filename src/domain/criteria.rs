//! Exact-match query object for `Bundle::find_parts`

use super::part::Part;

/// Partial record of part fields; a part matches when every set field is equal
#[derive(Debug, Clone, PartialEq)]
pub struct Criteria<T = serde_json::Value> {
    pub name: Option<String>,
    pub part_type: Option<String>,
    pub data: Option<T>,
    pub created_at: Option<i64>,
}

impl<T> Default for Criteria<T> {
    fn default() -> Self {
        Self {
            name: None,
            part_type: None,
            data: None,
            created_at: None,
        }
    }
}

impl<T> Criteria<T> {
    /// Empty criteria, which matches every part
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn part_type(mut self, part_type: impl Into<String>) -> Self {
        self.part_type = Some(part_type.into());
        self
    }

    #[must_use]
    pub fn data(mut self, data: T) -> Self {
        self.data = Some(data);
        self
    }

    #[must_use]
    pub fn created_at(mut self, created_at: i64) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.part_type.is_none()
            && self.data.is_none()
            && self.created_at.is_none()
    }
}

impl<T: PartialEq> Criteria<T> {
    /// Whether `part` satisfies every field set on these criteria
    pub fn matches(&self, part: &Part<T>) -> bool {
        self.name.as_deref().is_none_or(|name| part.has_name(name))
            && self
                .part_type
                .as_deref()
                .is_none_or(|part_type| part.part_type() == part_type)
            && self.data.as_ref().is_none_or(|data| part.data() == data)
            && self
                .created_at
                .is_none_or(|created_at| part.created_at() == created_at)
    }
}
