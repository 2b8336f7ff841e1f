use serde::Serialize;

use crate::compare::engine::{difference, equivalent};
use crate::model::{CommunicationProfile, Dimension};

/// Comparison outcome for one dimension of two profiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DimensionDiff {
    pub dimension: Dimension,
    /// Strict item-level equivalence (see [`equivalent`]).
    pub equivalent: bool,
    /// Old items the new profile cannot represent (see [`difference`]).
    pub missing: Vec<String>,
}

impl DimensionDiff {
    pub fn is_clean(&self) -> bool {
        self.equivalent && self.missing.is_empty()
    }
}

/// Compare every dimension of `old` against `new`, in [`Dimension::ALL`] order.
pub fn profile_diff(old: &CommunicationProfile, new: &CommunicationProfile) -> Vec<DimensionDiff> {
    Dimension::ALL
        .iter()
        .map(|&dimension| {
            let old_items = old.dimension(dimension);
            let new_items = new.dimension(dimension);
            DimensionDiff {
                dimension,
                equivalent: equivalent(old_items, new_items),
                missing: difference(old_items, new_items, dimension),
            }
        })
        .collect()
}

/// Whether `new` is equivalent to `old` on every listed dimension.
pub fn equivalent_across(
    old: &CommunicationProfile,
    new: &CommunicationProfile,
    dimensions: &[Dimension],
) -> bool {
    dimensions
        .iter()
        .all(|&dimension| equivalent(old.dimension(dimension), new.dimension(dimension)))
}

#[cfg(test)]
mod tests {
    use super::{equivalent_across, profile_diff};
    use crate::model::{BaseType, CommunicationProfile, Dimension};
    use crate::vocab;

    #[test]
    fn profile_is_equivalent_to_itself() {
        let profile = CommunicationProfile::new("p", BaseType::Mqtt)
            .with_item(Dimension::CommunicationPattern, 3, "Publish/Subscribe")
            .with_item(Dimension::HeaderSize, 1, vocab::HEADER_SMALL);
        assert!(equivalent_across(&profile, &profile, &Dimension::ALL));
        assert!(profile_diff(&profile, &profile).iter().all(|d| d.is_clean()));
    }

    #[test]
    fn diff_reports_missing_items_per_dimension() {
        let old = CommunicationProfile::new("old", BaseType::Http)
            .with_item(Dimension::QosType, 1, vocab::QOS_TCP)
            .with_item(Dimension::IotLevel, 3, "Gateway to Server");
        let new = CommunicationProfile::new("new", BaseType::Coap)
            .with_item(Dimension::QosType, 1, vocab::QOS_TCP);

        let diffs = profile_diff(&old, &new);
        assert_eq!(diffs.len(), Dimension::ALL.len());
        let iot = diffs
            .iter()
            .find(|d| d.dimension == Dimension::IotLevel)
            .expect("iot diff");
        assert!(!iot.equivalent);
        assert_eq!(iot.missing, vec!["Gateway to Server".to_string()]);
        assert!(!equivalent_across(&old, &new, &[Dimension::IotLevel]));
        assert!(equivalent_across(&old, &new, &[Dimension::QosType]));
    }
}
