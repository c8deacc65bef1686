//! Frame name normalization.
//!
//! Turns raw, decorated function identifiers into the canonical names
//! used as call graph nodes.

pub mod name;
pub mod tidy;

pub use name::FrameName;
pub use tidy::{normalize, FamilyRule, Normalizer, NormalizerConfig};
