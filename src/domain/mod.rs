//! Domain models for partbundle
//!
//! Plain value types the bundle stores and queries with. None of them
//! know about the bundle itself.

pub mod counts;
pub mod criteria;
pub mod part;

pub use counts::PartCounts;
pub use criteria::Criteria;
pub use part::Part;
