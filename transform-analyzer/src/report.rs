use colored::Colorize;
use comm_profile_core::{
    format_summary, format_text, CommunicationProfile, Dimension, DimensionDiff,
    EnvironmentProfile,
};

use crate::outcome::{
    AnalysisOutcome, LossReport, Possibility, Requirement, KEY_DIFFICULTY, KEY_LOSSES, KEY_POINTS,
    KEY_POSSIBLE, KEY_REQUIRED, KEY_SUGGESTED,
};
use crate::scoring::ScoredCandidate;

/// Render an analysis outcome for terminal output, one entry per line.
pub fn render_outcome(outcome: &AnalysisOutcome) -> String {
    let mut out = Vec::new();

    let verdict = outcome.requirement.verdict();
    let verdict = match outcome.requirement {
        Requirement::NotRequired => verdict.green(),
        Requirement::AppLevel => verdict.yellow(),
        Requirement::Required => verdict.cyan(),
    };
    out.push(format!("{KEY_REQUIRED} {verdict}"));

    if let Some(possibility) = outcome.possibility {
        let text = match possibility {
            Possibility::Possible => possibility.verdict().green(),
            Possibility::NotPossible => possibility.verdict().red(),
        };
        out.push(format!("{KEY_POSSIBLE} {text}"));
    }
    if let Some(name) = &outcome.suggested {
        out.push(format!("{KEY_SUGGESTED}: {}", name.bold()));
    }
    if let Some(difficulty) = outcome.difficulty {
        let label = if difficulty.label().is_empty() {
            "(trivial)"
        } else {
            difficulty.label()
        };
        out.push(format!("{KEY_DIFFICULTY}: {label}"));
    }
    if let Some(points) = outcome.points {
        out.push(format!("{KEY_POINTS}: {points}"));
    }
    match &outcome.losses {
        Some(LossReport::Joined(losses)) | Some(LossReport::Listed(losses))
            if losses.is_empty() =>
        {
            out.push(format!("{KEY_LOSSES}: none"));
        }
        Some(report) => {
            out.push(format!("{KEY_LOSSES}:"));
            for loss in report.losses() {
                out.push(format!("- {}", loss.label().trim_end()).red().to_string());
            }
        }
        None => {}
    }

    out.join("\n")
}

/// Render scored candidates in the given order, marking the suggestion.
pub fn render_candidates(
    candidates: &[ScoredCandidate],
    suggested: Option<&str>,
    verbose: bool,
) -> String {
    let mut out = Vec::new();
    out.push(format!("candidates count={}", candidates.len()));
    for candidate in candidates {
        let marker = if Some(candidate.name.as_str()) == suggested {
            "*"
        } else {
            "-"
        };
        let losses = if candidate.losses.is_empty() {
            "none".to_string()
        } else {
            candidate
                .losses
                .iter()
                .map(|loss| loss.label().trim_end())
                .collect::<Vec<_>>()
                .join(", ")
        };
        let line = format!(
            "{marker} {} base={} points={} difficulty={} possible={} losses={}",
            candidate.name,
            candidate.base_type,
            candidate.points,
            if candidate.difficulty.label().is_empty() {
                "-"
            } else {
                candidate.difficulty.label()
            },
            candidate.possible,
            losses
        );
        let line = if !candidate.possible {
            line.red().to_string()
        } else if marker == "*" {
            line.green().to_string()
        } else {
            line
        };
        out.push(line);
        if verbose {
            for step in &candidate.trace {
                out.push(format!("    {step}"));
            }
        }
    }
    out.join("\n")
}

/// Render a dimension diff, colored by line kind.
pub fn render_diff(diffs: &[DimensionDiff]) -> String {
    let raw = format_text(diffs);
    let mut out = Vec::new();
    for line in raw.lines() {
        let colored = if line.starts_with('-') {
            line.red().to_string()
        } else if line.starts_with('~') {
            line.yellow().to_string()
        } else {
            line.to_string()
        };
        out.push(colored);
    }
    out.join("\n")
}

pub fn render_diff_summary(diffs: &[DimensionDiff]) -> String {
    format_summary(diffs).cyan().to_string()
}

/// Render one communication profile with every dimension.
pub fn render_communication(profile: &CommunicationProfile) -> String {
    let mut out = Vec::new();
    out.push(format!(
        "communication name={} base_type={}",
        profile.name.bold(),
        profile.base_type
    ));
    for dimension in Dimension::ALL {
        let items = profile.dimension(dimension);
        let names = if items.is_empty() {
            "(empty)".dimmed().to_string()
        } else {
            items
                .iter()
                .map(|item| format!("{}#{}", item.name, item.id))
                .collect::<Vec<_>>()
                .join(", ")
        };
        out.push(format!("- {dimension}: {names}"));
    }
    out.join("\n")
}

pub fn render_environment(environment: &EnvironmentProfile) -> String {
    let mut out = Vec::new();
    out.push(format!(
        "environment name={} supported={}",
        environment.name.bold(),
        environment.supported_communications.len()
    ));
    for name in environment.supported_names() {
        out.push(format!("- {name}"));
    }
    out.join("\n")
}
