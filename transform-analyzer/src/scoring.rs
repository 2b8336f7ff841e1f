use comm_profile_core::{
    contains_name, difference, vocab, BaseType, CommunicationProfile, Dimension,
};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::difficulty::{classify, Difficulty};
use crate::loss::{classify_losses, Comparison, Loss, LossInputs};
use crate::score_tables::ScoreTables;

/// Points per communication pattern the candidate lacks.
pub const PATTERN_POINTS: u32 = 50;
pub const REQUEST_TYPE_POINTS: u32 = 25;
pub const PAYLOAD_TYPE_POINTS: u32 = 25;
/// Unit of the header-size penalty (Large is three units, Medium and Small two).
pub const HEADER_SIZE_POINTS: u32 = 25;

/// Input problems that make a candidate impossible to score.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error(
        "profile '{profile}' needs exactly one communicationType for topology scoring, found {found}"
    )]
    AmbiguousTopology { profile: String, found: usize },
}

/// Score, difficulty and losses of one candidate replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredCandidate {
    pub name: String,
    pub base_type: BaseType,
    pub points: u32,
    pub difficulty: Difficulty,
    pub possible: bool,
    pub losses: Vec<Loss>,
    /// How the points were accumulated, one step per line.
    pub trace: Vec<String>,
}

/// Score replacing `old` with `candidate`.
pub fn score_candidate(
    old: &CommunicationProfile,
    candidate: &CommunicationProfile,
    tables: &ScoreTables,
) -> Result<ScoredCandidate, AnalysisError> {
    let comparison = if old.base_type.is_new() || candidate.base_type.is_new() {
        Comparison::Novel
    } else {
        Comparison::Known {
            from: &old.base_type,
            to: &candidate.base_type,
        }
    };

    let start = match comparison {
        Comparison::Novel => {
            tables.novel_points(single_topology(old)?, single_topology(candidate)?)
        }
        Comparison::Known { from, to } => tables.known_points(from, to),
    };

    let diff = |dimension: Dimension| {
        difference(
            old.dimension(dimension),
            candidate.dimension(dimension),
            dimension,
        )
    };

    let pattern_diff = diff(Dimension::CommunicationPattern);
    let pattern_added = PATTERN_POINTS * pattern_diff.len() as u32;

    let request_diff = diff(Dimension::RequestType);
    let request_added = if request_diff.is_empty() {
        0
    } else {
        REQUEST_TYPE_POINTS
    };
    // Keyed on the request-type difference; the payload-type difference
    // never changes the score.
    let payload_added = if request_diff.is_empty() {
        0
    } else {
        PAYLOAD_TYPE_POINTS
    };
    let header_added = header_size_penalty(old);

    let points = start + pattern_added + request_added + payload_added + header_added;
    let (difficulty, possible) = classify(points);

    let losses = classify_losses(
        &LossInputs {
            header_size: diff(Dimension::HeaderSize).len(),
            request_type: request_diff.len(),
            security_type: diff(Dimension::SecurityType).len(),
            authentication_type: diff(Dimension::AuthenticationType).len(),
            qos_type: diff(Dimension::QosType).len(),
        },
        comparison,
    );

    let trace = vec![
        format!("Comm: {}", candidate.name),
        format!("Start: {start}"),
        format!("CommPattern: {pattern_added}"),
        format!("ReqType: {request_added}"),
        format!("PayloadType: {payload_added}"),
        format!("HeaderSize: {header_added}"),
        format!("End: {points}"),
    ];
    debug!(
        candidate = %candidate.name,
        novel = comparison.is_novel(),
        trace = %trace.join(" | "),
        "scored candidate"
    );

    Ok(ScoredCandidate {
        name: candidate.name.clone(),
        base_type: candidate.base_type.clone(),
        points,
        difficulty,
        possible,
        losses,
        trace,
    })
}

/// Penalty from the old profile's header size alone.
pub fn header_size_penalty(old: &CommunicationProfile) -> u32 {
    let headers = old.dimension(Dimension::HeaderSize);
    if contains_name(headers, vocab::HEADER_LARGE) {
        HEADER_SIZE_POINTS * 3
    } else if contains_name(headers, vocab::HEADER_MEDIUM)
        || contains_name(headers, vocab::HEADER_SMALL)
    {
        HEADER_SIZE_POINTS * 2
    } else {
        0
    }
}

fn single_topology(profile: &CommunicationProfile) -> Result<&str, AnalysisError> {
    match profile.communication_type.as_slice() {
        [only] => Ok(&only.name),
        items => Err(AnalysisError::AmbiguousTopology {
            profile: profile.name.clone(),
            found: items.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use comm_profile_core::{vocab, BaseType, CommunicationProfile, Dimension};

    use super::{header_size_penalty, score_candidate, AnalysisError};
    use crate::difficulty::Difficulty;
    use crate::loss::Loss;
    use crate::score_tables::default_score_tables;

    fn novel(name: &str, topology: &str) -> CommunicationProfile {
        CommunicationProfile::new(name, BaseType::New).with_item(
            Dimension::CommunicationType,
            1,
            topology,
        )
    }

    #[test]
    fn http_to_coap_with_matching_dimensions_is_trivial() {
        let old = CommunicationProfile::new("old", BaseType::Http)
            .with_item(Dimension::CommunicationPattern, 2, "Request/Response");
        let new = CommunicationProfile::new("new", BaseType::Coap)
            .with_item(Dimension::CommunicationPattern, 2, "Request/Response");

        let scored = score_candidate(&old, &new, &default_score_tables()).expect("score");
        assert_eq!(scored.points, 100);
        assert_eq!(scored.difficulty, Difficulty::None);
        assert!(scored.possible);
        assert_eq!(scored.losses, vec![Loss::HeaderFields]);
    }

    #[test]
    fn brokered_to_data_centric_is_very_hard() {
        let old = novel("old", "Brokered Messaging");
        let new = novel("new", "Data-Centric Brokered Messaging");

        let scored = score_candidate(&old, &new, &default_score_tables()).expect("score");
        assert_eq!(scored.points, 500);
        assert_eq!(scored.difficulty, Difficulty::VeryHard);
        assert!(scored.possible);
        assert!(scored.losses.is_empty());
    }

    #[test]
    fn novel_side_forces_topology_lookup() {
        let old = CommunicationProfile::new("old", BaseType::Mqtt).with_item(
            Dimension::CommunicationType,
            3,
            "Brokered Messaging",
        );
        let new = novel("new", "Brokered Messaging");
        let scored = score_candidate(&old, &new, &default_score_tables()).expect("score");
        assert_eq!(scored.points, 150);
    }

    #[test]
    fn missing_topology_is_an_input_error() {
        let old = CommunicationProfile::new("old", BaseType::Mqtt);
        let new = novel("new", "Brokered Messaging");
        let err = score_candidate(&old, &new, &default_score_tables()).expect_err("ambiguous");
        assert_eq!(
            err,
            AnalysisError::AmbiguousTopology {
                profile: "old".to_string(),
                found: 0,
            }
        );
    }

    #[test]
    fn payload_penalty_follows_request_type_difference() {
        let tables = default_score_tables();

        // payload differs but request type matches: no payload points
        let old = CommunicationProfile::new("old", BaseType::Http)
            .with_item(Dimension::PayloadType, 2, vocab::PAYLOAD_BINARY);
        let new = CommunicationProfile::new("new", BaseType::Http);
        let scored = score_candidate(&old, &new, &tables).expect("score");
        assert_eq!(scored.points, 0);
        assert!(scored.trace.contains(&"PayloadType: 0".to_string()));

        // request type differs but payload matches: payload points anyway
        let old = CommunicationProfile::new("old", BaseType::Http)
            .with_item(Dimension::RequestType, 1, vocab::REQUEST_SYNC);
        let scored = score_candidate(&old, &new, &tables).expect("score");
        assert_eq!(scored.points, 50);
        assert!(scored.trace.contains(&"PayloadType: 25".to_string()));
        assert_eq!(scored.losses, vec![Loss::HeaderFields, Loss::Asynchrony]);
    }

    #[test]
    fn small_and_medium_headers_cost_the_same() {
        let small = CommunicationProfile::new("s", BaseType::Mqtt)
            .with_item(Dimension::HeaderSize, 1, vocab::HEADER_SMALL);
        let medium = CommunicationProfile::new("m", BaseType::Mqtt)
            .with_item(Dimension::HeaderSize, 2, vocab::HEADER_MEDIUM);
        let large = CommunicationProfile::new("l", BaseType::Mqtt)
            .with_item(Dimension::HeaderSize, 2, vocab::HEADER_MEDIUM)
            .with_item(Dimension::HeaderSize, 3, vocab::HEADER_LARGE);
        assert_eq!(header_size_penalty(&small), 50);
        assert_eq!(header_size_penalty(&medium), 50);
        assert_eq!(header_size_penalty(&large), 75);
        assert_eq!(
            header_size_penalty(&CommunicationProfile::new("n", BaseType::Mqtt)),
            0
        );
    }

    #[test]
    fn pattern_penalty_counts_each_missing_pattern() {
        let old = CommunicationProfile::new("old", BaseType::Amqp)
            .with_item(Dimension::CommunicationPattern, 1, "Fire/Forget")
            .with_item(Dimension::CommunicationPattern, 3, "Publish/Subscribe");
        let new = CommunicationProfile::new("new", BaseType::Dds);
        let scored = score_candidate(&old, &new, &default_score_tables()).expect("score");
        assert_eq!(scored.points, 850);
        assert_eq!(scored.difficulty, Difficulty::Impossible);
        assert!(!scored.possible);
        assert_eq!(
            scored.trace,
            vec![
                "Comm: new",
                "Start: 750",
                "CommPattern: 100",
                "ReqType: 0",
                "PayloadType: 0",
                "HeaderSize: 0",
                "End: 850",
            ]
        );
    }

    #[test]
    fn unmatched_old_item_never_lowers_points() {
        let tables = default_score_tables();
        let old = CommunicationProfile::new("old", BaseType::Amqp)
            .with_item(Dimension::CommunicationPattern, 3, "Publish/Subscribe")
            .with_item(Dimension::RequestType, 1, vocab::REQUEST_SYNC);
        let new = CommunicationProfile::new("new", BaseType::Stomp)
            .with_item(Dimension::CommunicationPattern, 3, "Publish/Subscribe")
            .with_item(Dimension::RequestType, 1, vocab::REQUEST_SYNC);
        let base = score_candidate(&old, &new, &tables).expect("base").points;

        for dimension in Dimension::ALL {
            if dimension == Dimension::CommunicationType {
                continue;
            }
            let widened = old.clone().with_item(dimension, 99, "Unmatched");
            let points = score_candidate(&widened, &new, &tables)
                .expect("widened")
                .points;
            assert!(
                points >= base,
                "{dimension}: {points} dropped below {base}"
            );
        }
    }
}
