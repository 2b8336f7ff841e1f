//! Requirement detection, candidate scoring and outcome assembly.
//!
//! The engine is pure: profiles are resolved by the caller (see
//! [`crate::catalog`]) and nothing here reads files or keeps state between
//! calls.

use comm_profile_core::{equivalent_across, CommunicationProfile, Dimension, EnvironmentProfile};
use tracing::{info, warn};

use crate::outcome::{AnalysisOutcome, LossReport, Possibility, Requirement};
use crate::rank::{by_points, select_best};
use crate::score_tables::ScoreTables;
use crate::scoring::{score_candidate, AnalysisError, ScoredCandidate};

/// Dimensions a same-protocol candidate must match for no transformation to
/// be needed.
pub const REQUIREMENT_DIMENSIONS: [Dimension; 5] = [
    Dimension::CommunicationType,
    Dimension::CommunicationPattern,
    Dimension::RequestType,
    Dimension::HeaderSize,
    Dimension::PayloadType,
];

/// Everything one analysis needs, already resolved from storage.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisRequest<'a> {
    pub old_environment: &'a EnvironmentProfile,
    pub new_environment: &'a EnvironmentProfile,
    pub old_communication: &'a CommunicationProfile,
    /// Profiles the new environment supports.
    pub candidates: &'a [CommunicationProfile],
}

/// Outcome plus every scored candidate in points order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub outcome: AnalysisOutcome,
    /// Empty when no transformation is required.
    pub candidates: Vec<ScoredCandidate>,
}

/// Decide whether `old` has to be transformed to run on `candidates`.
pub fn determine_requirement(
    old: &CommunicationProfile,
    candidates: &[CommunicationProfile],
) -> Requirement {
    if old.base_type.is_new() {
        return Requirement::Required;
    }

    let mut same_protocol = false;
    for candidate in candidates {
        if candidate.base_type != old.base_type {
            continue;
        }
        if equivalent_across(old, candidate, &REQUIREMENT_DIMENSIONS) {
            return Requirement::NotRequired;
        }
        same_protocol = true;
    }

    if same_protocol {
        Requirement::AppLevel
    } else {
        Requirement::Required
    }
}

/// Score every candidate, in input order.
pub fn score_candidates(
    old: &CommunicationProfile,
    candidates: &[CommunicationProfile],
    tables: &ScoreTables,
) -> Result<Vec<ScoredCandidate>, AnalysisError> {
    candidates
        .iter()
        .map(|candidate| score_candidate(old, candidate, tables))
        .collect()
}

/// Run a full analysis.
pub fn analyze(
    request: &AnalysisRequest<'_>,
    tables: &ScoreTables,
) -> Result<AnalysisOutcome, AnalysisError> {
    Ok(analyze_with_candidates(request, tables)?.outcome)
}

/// Run a full analysis and keep the scored candidates.
pub fn analyze_with_candidates(
    request: &AnalysisRequest<'_>,
    tables: &ScoreTables,
) -> Result<Analysis, AnalysisError> {
    let old = request.old_communication;
    if !request.old_environment.supports(&old.name) {
        warn!(
            communication = %old.name,
            environment = %request.old_environment.name,
            "old communication is not listed in the old environment"
        );
    }

    let requirement = determine_requirement(old, request.candidates);
    info!(
        communication = %old.name,
        from = %request.old_environment.name,
        to = %request.new_environment.name,
        verdict = requirement.verdict(),
        "requirement decided"
    );

    if requirement == Requirement::NotRequired {
        return Ok(Analysis {
            outcome: AnalysisOutcome::new(requirement),
            candidates: Vec::new(),
        });
    }

    let scored = score_candidates(old, request.candidates, tables)?;
    let outcome = assemble_outcome(requirement, &scored);
    let candidates = by_points(&scored).into_iter().cloned().collect();
    Ok(Analysis {
        outcome,
        candidates,
    })
}

fn assemble_outcome(requirement: Requirement, scored: &[ScoredCandidate]) -> AnalysisOutcome {
    let mut outcome = AnalysisOutcome::new(requirement);
    let Some(best) = select_best(scored) else {
        return outcome;
    };

    match requirement {
        Requirement::Required => {
            outcome.possibility = Some(Possibility::from_flag(best.possible));
            if best.possible {
                outcome.suggested = Some(best.name.clone());
                outcome.difficulty = Some(best.difficulty);
                outcome.losses = Some(LossReport::Joined(best.losses.clone()));
            }
        }
        Requirement::AppLevel => {
            outcome.points = Some(best.points);
            outcome.losses = Some(LossReport::Listed(best.losses.clone()));
        }
        Requirement::NotRequired => {}
    }
    outcome
}

#[cfg(test)]
mod tests {
    use comm_profile_core::{vocab, BaseType, CommunicationProfile, Dimension, EnvironmentProfile};

    use super::{analyze, analyze_with_candidates, determine_requirement, AnalysisRequest};
    use crate::outcome::{Possibility, Requirement};
    use crate::score_tables::default_score_tables;

    fn mqtt(name: &str) -> CommunicationProfile {
        CommunicationProfile::new(name, BaseType::Mqtt)
            .with_item(Dimension::CommunicationType, 3, "Brokered Messaging")
            .with_item(Dimension::CommunicationPattern, 3, "Publish/Subscribe")
            .with_item(Dimension::HeaderSize, 1, vocab::HEADER_SMALL)
    }

    fn envs() -> (EnvironmentProfile, EnvironmentProfile) {
        (EnvironmentProfile::new("from"), EnvironmentProfile::new("to"))
    }

    #[test]
    fn identical_profile_is_not_required() {
        let old = mqtt("sensor");
        assert_eq!(
            determine_requirement(&old, std::slice::from_ref(&old)),
            Requirement::NotRequired
        );
    }

    #[test]
    fn equivalent_same_protocol_short_circuits_cheaper_candidates() {
        let old = mqtt("sensor");
        let cheaper = CommunicationProfile::new("amqp", BaseType::Amqp);
        let superset = mqtt("broker").with_item(
            Dimension::CommunicationPattern,
            1,
            "Fire/Forget",
        );
        let candidates = vec![cheaper, superset];
        let (from, to) = envs();
        let request = AnalysisRequest {
            old_environment: &from,
            new_environment: &to,
            old_communication: &old,
            candidates: &candidates,
        };

        let analysis = analyze_with_candidates(&request, &default_score_tables()).expect("analyze");
        assert_eq!(analysis.outcome.requirement, Requirement::NotRequired);
        assert!(analysis.candidates.is_empty());
    }

    #[test]
    fn new_base_type_never_matches_by_protocol() {
        let old = CommunicationProfile::new("custom", BaseType::New).with_item(
            Dimension::CommunicationType,
            3,
            "Brokered Messaging",
        );
        assert_eq!(
            determine_requirement(&old, std::slice::from_ref(&old)),
            Requirement::Required
        );
    }

    #[test]
    fn same_protocol_mismatch_is_app_level() {
        let old = mqtt("sensor").with_item(Dimension::CommunicationPattern, 1, "Fire/Forget");
        let candidates = vec![mqtt("broker")];
        let (from, to) = envs();
        let request = AnalysisRequest {
            old_environment: &from,
            new_environment: &to,
            old_communication: &old,
            candidates: &candidates,
        };

        let outcome = analyze(&request, &default_score_tables()).expect("analyze");
        assert_eq!(outcome.requirement, Requirement::AppLevel);
        // one missing pattern and a small header
        assert_eq!(outcome.points, Some(100));
        assert!(outcome.possibility.is_none());
        assert!(outcome.suggested.is_none());
    }

    #[test]
    fn empty_candidate_list_emits_only_requirement() {
        let old = mqtt("sensor");
        let (from, to) = envs();
        let request = AnalysisRequest {
            old_environment: &from,
            new_environment: &to,
            old_communication: &old,
            candidates: &[],
        };
        let outcome = analyze(&request, &default_score_tables()).expect("analyze");
        assert_eq!(outcome.requirement, Requirement::Required);
        assert_eq!(outcome.entries().len(), 1);
    }

    #[test]
    fn infeasible_winner_reports_only_possibility() {
        let old = CommunicationProfile::new("rest", BaseType::Http)
            .with_item(Dimension::CommunicationPattern, 2, "Request/Response")
            .with_item(Dimension::HeaderSize, 2, vocab::HEADER_MEDIUM);
        let candidates = vec![CommunicationProfile::new("dds", BaseType::Dds)];
        let (from, to) = envs();
        let request = AnalysisRequest {
            old_environment: &from,
            new_environment: &to,
            old_communication: &old,
            candidates: &candidates,
        };

        let analysis = analyze_with_candidates(&request, &default_score_tables()).expect("analyze");
        assert_eq!(analysis.candidates[0].points, 850);
        assert_eq!(
            analysis.outcome.possibility,
            Some(Possibility::NotPossible)
        );
        assert!(analysis.outcome.suggested.is_none());
        assert!(analysis.outcome.difficulty.is_none());
        assert!(analysis.outcome.losses.is_none());
    }

    #[test]
    fn analysis_is_deterministic() {
        let old = mqtt("sensor").with_item(Dimension::RequestType, 1, vocab::REQUEST_SYNC);
        let candidates = vec![
            CommunicationProfile::new("coap", BaseType::Coap),
            CommunicationProfile::new("http", BaseType::Http),
            CommunicationProfile::new("amqp", BaseType::Amqp),
        ];
        let (from, to) = envs();
        let request = AnalysisRequest {
            old_environment: &from,
            new_environment: &to,
            old_communication: &old,
            candidates: &candidates,
        };
        let tables = default_score_tables();
        let first = analyze_with_candidates(&request, &tables).expect("first");
        let second = analyze_with_candidates(&request, &tables).expect("second");
        assert_eq!(first, second);
        assert_eq!(first.outcome.suggested.as_deref(), Some("amqp"));
    }
}
