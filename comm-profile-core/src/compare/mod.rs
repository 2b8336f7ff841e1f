//! Attribute-set equivalence and one-directional differences.

pub mod engine;
pub mod profile;
mod rules;

pub use engine::{difference, equivalent};
pub use profile::{equivalent_across, profile_diff, DimensionDiff};
