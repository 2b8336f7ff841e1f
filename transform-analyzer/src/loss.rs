//! Capability losses reported for a candidate transformation.

use std::fmt;

use comm_profile_core::BaseType;
use serde::{Serialize, Serializer};

/// A named capability that may degrade after transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Loss {
    HeaderFields,
    Asynchrony,
    Security,
    Authentication,
    Qos,
}

impl Loss {
    /// Output label. The trailing space on asynchrony is part of the wire text.
    pub fn label(self) -> &'static str {
        match self {
            Loss::HeaderFields => "Some header fields",
            Loss::Asynchrony => "Being asynchronous ",
            Loss::Security => "Security",
            Loss::Authentication => "Authentication",
            Loss::Qos => "QoS",
        }
    }
}

impl fmt::Display for Loss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Loss {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// How the base cost of a candidate was looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison<'a> {
    /// At least one side is `NEW`; costs come from topologies.
    Novel,
    /// Both sides derive from a protocol tag.
    Known {
        from: &'a BaseType,
        to: &'a BaseType,
    },
}

impl Comparison<'_> {
    pub fn is_novel(&self) -> bool {
        matches!(self, Comparison::Novel)
    }
}

/// Protocol transitions that carry every header field across.
const HEADER_PRESERVING: [(BaseType, BaseType); 3] = [
    (BaseType::Stomp, BaseType::Amqp),
    (BaseType::Mqtt, BaseType::Amqp),
    (BaseType::Coap, BaseType::Http),
];

/// Counts of the per-dimension differences losses are derived from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LossInputs {
    pub header_size: usize,
    pub request_type: usize,
    pub security_type: usize,
    pub authentication_type: usize,
    pub qos_type: usize,
}

/// Derive losses in fixed order: header fields, asynchrony, security,
/// authentication, QoS.
///
/// Between known protocols header fields are lost unless the header sizes
/// match and the pair is header-preserving.
pub fn classify_losses(diffs: &LossInputs, comparison: Comparison<'_>) -> Vec<Loss> {
    let mut losses = Vec::new();

    let header_loss = match comparison {
        Comparison::Novel => diffs.header_size > 0,
        Comparison::Known { from, to } => {
            diffs.header_size > 0 || !is_header_preserving(from, to)
        }
    };
    if header_loss {
        losses.push(Loss::HeaderFields);
    }
    if diffs.request_type > 0 {
        losses.push(Loss::Asynchrony);
    }
    if diffs.security_type > 0 {
        losses.push(Loss::Security);
    }
    if diffs.authentication_type > 0 {
        losses.push(Loss::Authentication);
    }
    if diffs.qos_type > 0 {
        losses.push(Loss::Qos);
    }
    losses
}

pub fn is_header_preserving(from: &BaseType, to: &BaseType) -> bool {
    HEADER_PRESERVING
        .iter()
        .any(|(pair_from, pair_to)| pair_from == from && pair_to == to)
}

/// Labels joined with `", "`.
pub fn join_labels(losses: &[Loss]) -> String {
    losses
        .iter()
        .map(|loss| loss.label())
        .collect::<Vec<_>>()
        .join(", ")
}
