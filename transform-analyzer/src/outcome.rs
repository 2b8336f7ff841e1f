use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::difficulty::Difficulty;
use crate::loss::{join_labels, Loss};

pub const KEY_REQUIRED: &str = "Is required?";
pub const KEY_POSSIBLE: &str = "Is possible?";
pub const KEY_SUGGESTED: &str = "Suggested communication type";
pub const KEY_DIFFICULTY: &str = "Difficulty";
pub const KEY_POINTS: &str = "Points";
pub const KEY_LOSSES: &str = "Possible losses";

/// Whether the old communication has to change at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    /// A same-protocol candidate matches on every requirement dimension.
    NotRequired,
    /// A same-protocol candidate exists but differs; only application code
    /// changes.
    AppLevel,
    /// No candidate shares the protocol.
    Required,
}

impl Requirement {
    pub fn verdict(self) -> &'static str {
        match self {
            Requirement::NotRequired => "It is not required",
            Requirement::AppLevel => {
                "It is required for only application level, application code must be updated."
            }
            Requirement::Required => "It is required",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Possibility {
    Possible,
    NotPossible,
}

impl Possibility {
    pub fn from_flag(possible: bool) -> Self {
        if possible {
            Possibility::Possible
        } else {
            Possibility::NotPossible
        }
    }

    pub fn verdict(self) -> &'static str {
        match self {
            Possibility::Possible => "It is possible",
            Possibility::NotPossible => "It is not possible",
        }
    }
}

/// Losses are joined for full transformations and listed for app-level ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LossReport {
    Joined(Vec<Loss>),
    Listed(Vec<Loss>),
}

impl LossReport {
    pub fn losses(&self) -> &[Loss] {
        match self {
            LossReport::Joined(losses) | LossReport::Listed(losses) => losses,
        }
    }
}

/// Result of one analysis.
///
/// Optional parts are only present for the requirement states that emit them;
/// see [`AnalysisOutcome::entries`] for the emitted order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOutcome {
    pub requirement: Requirement,
    pub possibility: Option<Possibility>,
    pub suggested: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub points: Option<u32>,
    pub losses: Option<LossReport>,
}

/// Value of one outcome entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EntryValue {
    Text(String),
    Number(u32),
    List(Vec<String>),
}

impl AnalysisOutcome {
    pub fn new(requirement: Requirement) -> Self {
        Self {
            requirement,
            possibility: None,
            suggested: None,
            difficulty: None,
            points: None,
            losses: None,
        }
    }

    /// Whether a transformation was required and judged not possible.
    pub fn is_not_possible(&self) -> bool {
        self.possibility == Some(Possibility::NotPossible)
    }

    /// Key/value pairs in output order: requirement, possibility, suggestion,
    /// difficulty, points, losses.
    pub fn entries(&self) -> Vec<(&'static str, EntryValue)> {
        let mut entries = vec![(
            KEY_REQUIRED,
            EntryValue::Text(self.requirement.verdict().to_string()),
        )];
        if let Some(possibility) = self.possibility {
            entries.push((KEY_POSSIBLE, EntryValue::Text(possibility.verdict().to_string())));
        }
        if let Some(name) = &self.suggested {
            entries.push((KEY_SUGGESTED, EntryValue::Text(name.clone())));
        }
        if let Some(difficulty) = self.difficulty {
            entries.push((KEY_DIFFICULTY, EntryValue::Text(difficulty.label().to_string())));
        }
        if let Some(points) = self.points {
            entries.push((KEY_POINTS, EntryValue::Number(points)));
        }
        match &self.losses {
            Some(LossReport::Joined(losses)) => {
                entries.push((KEY_LOSSES, EntryValue::Text(join_labels(losses))));
            }
            Some(LossReport::Listed(losses)) => {
                let labels = losses.iter().map(|loss| loss.label().to_string()).collect();
                entries.push((KEY_LOSSES, EntryValue::List(labels)));
            }
            None => {}
        }
        entries
    }
}

/// Serialized as an ordered array of single-key objects.
impl Serialize for AnalysisOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries = self.entries();
        let mut seq = serializer.serialize_seq(Some(entries.len()))?;
        for (key, value) in &entries {
            seq.serialize_element(&SingleEntry { key: *key, value })?;
        }
        seq.end()
    }
}

struct SingleEntry<'a> {
    key: &'a str,
    value: &'a EntryValue,
}

impl Serialize for SingleEntry<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key, self.value)?;
        map.end()
    }
}
