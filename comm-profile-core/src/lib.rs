//! Communication profile model, parsing and attribute-set comparison primitives
//! used by higher-level transformation tools.

pub mod compare;
pub mod format;
pub mod model;
pub mod parser;
pub mod vocab;

pub use compare::{
    difference, equivalent, equivalent_across, profile_diff, DimensionDiff,
};
pub use format::{format_json, format_summary, format_text};
pub use model::{
    contains_name, AttributeItem, BaseType, CommunicationProfile, Dimension, EnvironmentProfile,
};
pub use parser::{
    parse_communication, parse_communication_file, parse_document, parse_document_file,
    parse_environment, parse_environment_file, ParseError, ProfileDocument,
};
