use crate::compare::DimensionDiff;

/// Format dimension diffs as plain text.
///
/// `=` marks a clean dimension, `~` a dimension that is not strictly
/// equivalent although nothing is missing, and `-` one line per missing item.
pub fn format_text(diffs: &[DimensionDiff]) -> String {
    let mut lines = Vec::with_capacity(diffs.len());
    for diff in diffs {
        if diff.is_clean() {
            lines.push(format!("= {}", diff.dimension));
        } else if diff.missing.is_empty() {
            lines.push(format!("~ {}", diff.dimension));
        } else {
            for item in &diff.missing {
                lines.push(format!("- {}: {item}", diff.dimension));
            }
        }
    }
    lines.join("\n")
}

/// Format a one-line count summary of dimension diffs.
pub fn format_summary(diffs: &[DimensionDiff]) -> String {
    let equivalent = diffs.iter().filter(|d| d.equivalent).count();
    let differing = diffs.len() - equivalent;
    let missing: usize = diffs.iter().map(|d| d.missing.len()).sum();

    format!("equivalent={equivalent} differing={differing} missing_items={missing}")
}
