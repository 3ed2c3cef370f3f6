//! Common test utilities for partbundle integration tests

use partbundle::{Bundle, FixedClock, Part};
use serde_json::{Value, json};

/// Instant every test clock starts at (2024-01-01T00:00:00Z)
#[allow(dead_code)]
pub const START: i64 = 1_704_067_200_000;

/// A bundle on a frozen clock, for deterministic timestamps
pub type TestBundle = Bundle<Value, FixedClock>;

/// Create an empty test bundle
#[allow(dead_code)]
pub fn empty_bundle() -> TestBundle {
    Bundle::with_clock(FixedClock::new(START))
}

/// Create a bundle seeded with parts given as (name, type, data)
#[allow(dead_code)]
pub fn bundle_with(parts: &[(&str, &str, &str)]) -> TestBundle {
    let mut bundle = empty_bundle();
    bundle.set_parts(
        parts
            .iter()
            .map(|(name, part_type, data)| Part::named(*name, *part_type, json!(data), 0))
            .collect(),
    );
    bundle
}

/// Names of the given parts, anonymous parts as `None`
#[allow(dead_code)]
pub fn names<'a>(parts: impl IntoIterator<Item = &'a Part<Value>>) -> Vec<Option<&'a str>> {
    parts.into_iter().map(Part::name).collect()
}
