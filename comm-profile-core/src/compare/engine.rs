use crate::compare::rules;
use crate::model::{AttributeItem, Dimension};

/// Whether `new` can stand in for `old` on one dimension.
///
/// Every old item must appear in `new` (same id and name) and `new` may not
/// be smaller than `old`. No dimension-specific rules apply here; absent sets
/// are represented as empty ones.
pub fn equivalent(old: &[AttributeItem], new: &[AttributeItem]) -> bool {
    old.len() <= new.len() && old.iter().all(|item| new.contains(item))
}

/// Names of the `old` items that `new` cannot represent, in `old` order.
///
/// Dimension rules are applied first: some new-side items cover the whole
/// dimension (async requests, MIME payloads, complex QoS, large headers), and
/// some old-side items never count as missing.
pub fn difference(old: &[AttributeItem], new: &[AttributeItem], kind: Dimension) -> Vec<String> {
    if rules::covers_everything(kind, new) {
        return Vec::new();
    }

    old.iter()
        .filter(|old_item| {
            !rules::always_representable(kind, old_item, new)
                && !new
                    .iter()
                    .any(|new_item| rules::items_match(kind, old_item, new_item))
        })
        .map(|item| item.name.clone())
        .collect()
}
