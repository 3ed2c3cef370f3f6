//! Snapshot serialization for bundles
//!
//! A snapshot is `{ "parts": [...] }`, each part carrying its original
//! `createdAt`. The clock is not part of the snapshot.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::domain::Part;
use crate::error::{Result, snapshot_parse_failed};

#[derive(Serialize)]
struct SnapshotRef<'a, T> {
    parts: &'a [Part<T>],
}

#[derive(Deserialize)]
struct SnapshotData<T> {
    parts: Vec<Part<T>>,
}

/// Serialize a part list as a snapshot
pub fn serialize_snapshot<S, T>(
    parts: &[Part<T>],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
    T: Serialize,
{
    SnapshotRef { parts }.serialize(serializer)
}

/// Deserialize a snapshot into its part list
pub fn deserialize_snapshot<'de, D, T>(
    deserializer: D,
) -> std::result::Result<Vec<Part<T>>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    let data = SnapshotData::deserialize(deserializer)?;
    Ok(data.parts)
}

/// Parse the part list out of a JSON snapshot
pub fn parts_from_json<T: DeserializeOwned>(json: &str) -> Result<Vec<Part<T>>> {
    let data: SnapshotData<T> =
        serde_json::from_str(json).map_err(|e| snapshot_parse_failed("JSON", e.to_string()))?;
    Ok(data.parts)
}

/// Parse the part list out of a YAML snapshot
pub fn parts_from_yaml<T: DeserializeOwned>(yaml: &str) -> Result<Vec<Part<T>>> {
    let data: SnapshotData<T> =
        serde_yaml::from_str(yaml).map_err(|e| snapshot_parse_failed("YAML", e.to_string()))?;
    Ok(data.parts)
}
