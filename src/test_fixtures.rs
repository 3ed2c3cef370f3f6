//! Test fixtures for reducing bundle setup duplication.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{fixed_bundle, seeded_bundle};
//!
//! #[test]
//! fn my_test() {
//!     // Empty bundle on a frozen clock
//!     let mut bundle = fixed_bundle();
//!
//!     // A(type-1), B(type-1), C(type-2)
//!     let bundle = seeded_bundle();
//! }
//! ```

use serde_json::{Value, json};

use crate::bundle::Bundle;
use crate::clock::FixedClock;
use crate::domain::Part;

/// Instant every fixture clock starts at (2024-01-01T00:00:00Z)
pub const FIXED_NOW: i64 = 1_704_067_200_000;

/// Empty bundle whose clock is frozen at [`FIXED_NOW`]
#[must_use]
pub fn fixed_bundle() -> Bundle<Value, FixedClock> {
    Bundle::with_clock(FixedClock::new(FIXED_NOW))
}

/// The three parts most tests start from
#[must_use]
pub fn seed_parts() -> Vec<Part<Value>> {
    vec![
        Part::named("A", "type-1", json!("data-A"), 1),
        Part::named("B", "type-1", json!("data-B"), 2),
        Part::named("C", "type-2", json!("data-C"), 3),
    ]
}

/// Bundle seeded through `set_parts` with [`seed_parts`]
#[must_use]
pub fn seeded_bundle() -> Bundle<Value, FixedClock> {
    let mut bundle = fixed_bundle();
    bundle.set_parts(seed_parts());
    bundle
}
