//! Per-type part counts

use super::part::Part;

/// Count of parts by type, in the order each type was first seen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartCounts {
    entries: Vec<(String, usize)>,
}

impl PartCounts {
    pub fn from_parts<'a, T: 'a>(parts: impl IntoIterator<Item = &'a Part<T>>) -> Self {
        let mut counts = Self::default();
        for part in parts {
            counts.record(part.part_type());
        }
        counts
    }

    fn record(&mut self, part_type: &str) {
        match self.entries.iter_mut().find(|(t, _)| t == part_type) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((part_type.to_string(), 1)),
        }
    }

    /// Number of parts with the given type
    pub fn get(&self, part_type: &str) -> usize {
        self.entries
            .iter()
            .find(|(t, _)| t == part_type)
            .map_or(0, |(_, count)| *count)
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(t, count)| (t.as_str(), *count))
    }

    /// Human-readable summary such as "2 headers, 1 footer"
    pub fn format(&self) -> Option<String> {
        if self.entries.is_empty() {
            return None;
        }

        let formatted: Vec<String> = self
            .entries
            .iter()
            .map(|(part_type, count)| match *count {
                1 => format!("1 {part_type}"),
                _ => format!("{count} {part_type}s"),
            })
            .collect();

        Some(formatted.join(", "))
    }
}
