use crate::compare::DimensionDiff;

/// Format dimension diffs as JSON.
pub fn format_json(diffs: &[DimensionDiff]) -> String {
    serde_json::to_string_pretty(diffs).unwrap_or_else(|_| "[]".to_string())
}
