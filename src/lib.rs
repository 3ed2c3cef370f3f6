//! partbundle - in-memory bundle of named, typed parts
//!
//! A [`Bundle`] keeps an insertion-ordered list of [`Part`]s. Each part has an
//! optional name (unique within the bundle), a type label, an opaque payload
//! and a creation timestamp taken from the bundle's [`Clock`].
//!
//! ```
//! use partbundle::{Bundle, Criteria};
//! use serde_json::json;
//!
//! let mut bundle: Bundle = Bundle::new();
//! bundle.add_part(Some("greeting"), Some("text"), json!("hello"));
//! bundle.add_part(Some("greeting"), Some("text"), json!("ignored"));
//!
//! assert_eq!(bundle.len(), 1);
//! assert_eq!(bundle.get_part_data("greeting"), Some(&json!("hello")));
//! assert_eq!(bundle.find_parts(&Criteria::new().part_type("text")).len(), 1);
//! ```

pub mod bundle;
pub mod clock;
pub mod domain;
pub mod error;

#[cfg(test)]
mod test_fixtures;

pub use bundle::Bundle;
pub use clock::{Clock, FixedClock, SystemClock};
pub use domain::{Criteria, Part, PartCounts};
pub use error::{BundleError, Result};
