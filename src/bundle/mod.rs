//! Bundle: an ordered collection of uniquely-named, typed parts
//!
//! Every operation here is infallible. Rejected mutations are silent no-ops
//! and lookups that find nothing return `None` or an empty list; callers that
//! need to know whether an add will go through ask [`Bundle::can_add_part`]
//! first. The only fallible surface is snapshot decoding, which validates the
//! decoded parts.

pub mod serialization;

use std::collections::HashSet;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::bundle::serialization::{deserialize_snapshot, serialize_snapshot};
use crate::clock::{Clock, SystemClock};
use crate::domain::{Criteria, Part, PartCounts};
use crate::error::{Result, duplicate_name, snapshot_write_failed};

/// Ordered collection of parts, keyed by name on insertion
#[derive(Debug, Clone)]
pub struct Bundle<T = serde_json::Value, C = SystemClock> {
    /// Parts in insertion order
    parts: Vec<Part<T>>,
    clock: C,
}

impl<T, C: Default> Default for Bundle<T, C> {
    fn default() -> Self {
        Self::with_clock(C::default())
    }
}

impl<T> Bundle<T, SystemClock> {
    /// Create an empty bundle stamped by the system clock
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<T, C> Bundle<T, C> {
    /// Create an empty bundle stamped by `clock`
    pub fn with_clock(clock: C) -> Self {
        Self {
            parts: Vec::new(),
            clock,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// The live part sequence, in insertion order
    pub fn parts(&self) -> &[Part<T>] {
        &self.parts
    }

    /// Replace the whole part sequence
    ///
    /// No validation is performed, so this can seed a bundle with duplicate
    /// names. [`Bundle::get_part`] treats such names as not found.
    pub fn set_parts(&mut self, parts: Vec<Part<T>>) {
        self.parts = parts;
    }

    pub fn into_parts(self) -> Vec<Part<T>> {
        self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Part<T>> {
        self.parts.iter()
    }

    /// The single part named `name`
    ///
    /// Returns `None` both when no part has that name and when several do.
    pub fn get_part(&self, name: &str) -> Option<&Part<T>> {
        let mut matches = self.parts.iter().filter(|part| part.has_name(name));
        match (matches.next(), matches.next()) {
            (Some(part), None) => Some(part),
            _ => None,
        }
    }

    /// Payload of the part named `name`, see [`Bundle::get_part`]
    pub fn get_part_data(&self, name: &str) -> Option<&T> {
        self.get_part(name).map(Part::data)
    }

    /// Payloads of every part with the given type, in storage order
    pub fn get_parts_data(&self, part_type: &str) -> Vec<&T> {
        self.parts
            .iter()
            .filter(|part| part.part_type() == part_type)
            .map(Part::data)
            .collect()
    }

    pub fn contains_part(&self, name: &str) -> bool {
        self.parts.iter().any(|part| part.has_name(name))
    }

    pub fn counts(&self) -> PartCounts {
        PartCounts::from_parts(&self.parts)
    }

    /// Whether `add_part(name, part_type, ..)` would append a part
    ///
    /// False without a type. Anonymous parts (no or empty name) are always
    /// addable; named parts only when the name is not taken.
    pub fn can_add_part(&self, name: Option<&str>, part_type: Option<&str>) -> bool {
        self.add_rejection(name, part_type).is_none()
    }

    fn add_rejection(&self, name: Option<&str>, part_type: Option<&str>) -> Option<&'static str> {
        if part_type.is_none_or(str::is_empty) {
            return Some("missing part type");
        }
        match name {
            Some(name) if !name.is_empty() && self.contains_part(name) => {
                Some("name already taken")
            }
            _ => None,
        }
    }

    /// Remove every part named `name`, keeping the survivors in order
    pub fn remove_part(&mut self, name: &str) {
        let before = self.parts.len();
        self.parts.retain(|part| !part.has_name(name));
        trace!(
            part_name = name,
            removed = before - self.parts.len(),
            "removed part"
        );
    }

    /// Check the bundle's parts: every type set and no name used twice
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for part in &self.parts {
            part.validate()?;
            let Some(name) = part.name().filter(|name| !name.is_empty()) else {
                continue;
            };
            if !seen.insert(name) {
                return Err(duplicate_name(name));
            }
        }
        Ok(())
    }
}

impl<T, C: Clock> Bundle<T, C> {
    /// Append a part stamped with the current time
    ///
    /// Silently does nothing when [`Bundle::can_add_part`] is false.
    pub fn add_part(&mut self, name: Option<&str>, part_type: Option<&str>, data: T) {
        if let Some(reason) = self.add_rejection(name, part_type) {
            debug!(part_name = ?name, ?part_type, reason, "part not added");
            return;
        }
        let Some(part_type) = part_type else {
            return;
        };

        let created_at = self.clock.now_millis();
        self.parts.push(Part::new(name, part_type, data, created_at));
        trace!(part_name = ?name, part_type, created_at, "added part");
    }

    /// Replace the part named `name` with a freshly stamped one
    ///
    /// Equivalent to `remove_part(name)` followed by `add_part`. The old part
    /// is removed before the new type is checked, so an absent or empty
    /// `part_type` drops the existing part and adds nothing.
    pub fn update_part(&mut self, name: &str, part_type: Option<&str>, data: T) {
        let existed = self.contains_part(name);
        self.remove_part(name);
        if existed && part_type.is_none_or(str::is_empty) {
            warn!(part_name = name, "part removed by update without a part type");
        }
        self.add_part(Some(name), part_type, data);
    }
}

impl<T: PartialEq, C> Bundle<T, C> {
    /// Every part matching `criteria`, in storage order
    pub fn find_parts(&self, criteria: &Criteria<T>) -> Vec<&Part<T>> {
        self.parts
            .iter()
            .filter(|part| criteria.matches(part))
            .collect()
    }
}

impl<T: Serialize, C> Bundle<T, C> {
    /// Encode the parts as a pretty-printed JSON snapshot
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| snapshot_write_failed("JSON", e.to_string()))
    }

    /// Encode the parts as a YAML snapshot
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| snapshot_write_failed("YAML", e.to_string()))
    }
}

impl<T: DeserializeOwned, C> Bundle<T, C> {
    /// Decode a JSON snapshot, stamping future parts with `clock`
    ///
    /// Timestamps of decoded parts are kept as-is.
    pub fn from_json_with_clock(json: &str, clock: C) -> Result<Self> {
        let parts = serialization::parts_from_json(json)?;
        Self::from_snapshot_parts(parts, clock)
    }

    /// Decode a YAML snapshot, stamping future parts with `clock`
    pub fn from_yaml_with_clock(yaml: &str, clock: C) -> Result<Self> {
        let parts = serialization::parts_from_yaml(yaml)?;
        Self::from_snapshot_parts(parts, clock)
    }

    fn from_snapshot_parts(parts: Vec<Part<T>>, clock: C) -> Result<Self> {
        let bundle = Self { parts, clock };
        bundle.validate()?;
        Ok(bundle)
    }
}

impl<T: DeserializeOwned, C: Default> Bundle<T, C> {
    /// Decode a JSON snapshot
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_json_with_clock(json, C::default())
    }

    /// Decode a YAML snapshot
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Self::from_yaml_with_clock(yaml, C::default())
    }
}

impl<'a, T, C> IntoIterator for &'a Bundle<T, C> {
    type Item = &'a Part<T>;
    type IntoIter = std::slice::Iter<'a, Part<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts.iter()
    }
}

impl<T: Serialize, C> Serialize for Bundle<T, C> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serialize_snapshot(&self.parts, serializer)
    }
}

impl<'de, T: Deserialize<'de>, C: Default> Deserialize<'de> for Bundle<T, C> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let parts = deserialize_snapshot(deserializer)?;
        Ok(Self {
            parts,
            clock: C::default(),
        })
    }
}
