use crate::scoring::ScoredCandidate;

/// Candidates ordered by points, ties kept in input order.
pub fn by_points(candidates: &[ScoredCandidate]) -> Vec<&ScoredCandidate> {
    let mut ordered: Vec<&ScoredCandidate> = candidates.iter().collect();
    ordered.sort_by_key(|candidate| candidate.points);
    ordered
}

/// Pick the suggested replacement.
///
/// Only the difficulty bucket of the cheapest candidate is considered. Inside
/// that bucket the fewest losses win, then the lowest points, then input
/// order. A candidate with more points can therefore beat a cheaper one that
/// loses more.
pub fn select_best(candidates: &[ScoredCandidate]) -> Option<&ScoredCandidate> {
    let mut ordered = by_points(candidates);
    let bucket = ordered.first()?.difficulty;
    ordered.retain(|candidate| candidate.difficulty == bucket);

    let fewest_losses = ordered.iter().map(|candidate| candidate.losses.len()).min()?;
    ordered.retain(|candidate| candidate.losses.len() == fewest_losses);

    ordered.sort_by_key(|candidate| candidate.points);
    ordered.first().copied()
}
