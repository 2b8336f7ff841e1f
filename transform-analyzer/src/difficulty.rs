use std::fmt;

use serde::{Serialize, Serializer};

/// Scores at or above this value are not feasible; scores above it are
/// labelled impossible. Exactly this score is "Very hard" yet infeasible.
pub const IMPOSSIBLE_THRESHOLD: u32 = 750;
pub const VERY_HARD_THRESHOLD: u32 = 450;
pub const HARD_THRESHOLD: u32 = 300;
pub const MEDIUM_THRESHOLD: u32 = 200;
pub const EASY_THRESHOLD: u32 = 100;

/// Ordinal difficulty bucket of a transformation score.
///
/// [`Difficulty::None`] is the trivial bucket and renders as an empty label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Difficulty {
    None,
    Easy,
    Medium,
    Hard,
    VeryHard,
    Impossible,
}

impl Difficulty {
    /// Label exactly as reported in analysis outcomes.
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::None => "",
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::VeryHard => "Very hard",
            Difficulty::Impossible => "Impossible",
        }
    }

    /// Bucket of the first threshold the score strictly exceeds.
    pub fn from_points(points: u32) -> Self {
        if points > IMPOSSIBLE_THRESHOLD {
            Difficulty::Impossible
        } else if points > VERY_HARD_THRESHOLD {
            Difficulty::VeryHard
        } else if points > HARD_THRESHOLD {
            Difficulty::Hard
        } else if points > MEDIUM_THRESHOLD {
            Difficulty::Medium
        } else if points > EASY_THRESHOLD {
            Difficulty::Easy
        } else {
            Difficulty::None
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Difficulty {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Whether a transformation with this score can be attempted at all.
pub fn is_possible(points: u32) -> bool {
    points < IMPOSSIBLE_THRESHOLD
}

/// Difficulty bucket and feasibility of a score.
pub fn classify(points: u32) -> (Difficulty, bool) {
    (Difficulty::from_points(points), is_possible(points))
}

#[cfg(test)]
mod tests {
    use super::{classify, is_possible, Difficulty};

    #[test]
    fn thresholds_are_strictly_exceeded() {
        assert_eq!(Difficulty::from_points(0), Difficulty::None);
        assert_eq!(Difficulty::from_points(100), Difficulty::None);
        assert_eq!(Difficulty::from_points(101), Difficulty::Easy);
        assert_eq!(Difficulty::from_points(200), Difficulty::Easy);
        assert_eq!(Difficulty::from_points(225), Difficulty::Medium);
        assert_eq!(Difficulty::from_points(300), Difficulty::Medium);
        assert_eq!(Difficulty::from_points(450), Difficulty::Hard);
        assert_eq!(Difficulty::from_points(500), Difficulty::VeryHard);
        assert_eq!(Difficulty::from_points(751), Difficulty::Impossible);
    }

    #[test]
    fn exactly_750_is_very_hard_and_not_possible() {
        assert_eq!(classify(750), (Difficulty::VeryHard, false));
        assert_eq!(classify(749), (Difficulty::VeryHard, true));
        assert_eq!(classify(751), (Difficulty::Impossible, false));
    }

    #[test]
    fn trivial_bucket_has_empty_label() {
        assert_eq!(Difficulty::None.label(), "");
        assert_eq!(Difficulty::VeryHard.to_string(), "Very hard");
        assert!(is_possible(0));
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&Difficulty::VeryHard).expect("serialize");
        assert_eq!(json, "\"Very hard\"");
    }
}
