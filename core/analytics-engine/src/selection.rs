//! FILENAME: core/analytics-engine/src/selection.rs
//! Filter Selection - The serializable snapshot of the user's filter choices.
//!
//! A selection maps a facet to the set of values the user allows:
//! - A facet absent from the selection imposes no constraint.
//! - A facet mapped to an empty set matches nothing.
//! - Selecting every known value of a facet is a no-op.
//!
//! Selections are plain values (hashable, ordered) so they can key a memo cache
//! and be sent across the presentation boundary unchanged.

use std::collections::{BTreeMap, BTreeSet};

use dataset::{Dataset, Facet, Record};
use serde::{Deserialize, Serialize};

/// Allowed values per facet. Conjunction across facets, disjunction within one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSelection {
    facets: BTreeMap<Facet, BTreeSet<String>>,
}

impl FilterSelection {
    /// A selection with no constraints at all.
    pub fn new() -> Self {
        FilterSelection::default()
    }

    /// Every known value of each selector facet selected (the dashboard's initial state).
    pub fn all(dataset: &Dataset) -> Self {
        let mut selection = FilterSelection::new();
        for facet in Facet::SELECTORS {
            selection.set(facet, dataset.distinct_values(facet).iter().cloned());
        }
        selection
    }

    /// Builder-style variant of `set`.
    pub fn with_values<I, S>(mut self, facet: Facet, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set(facet, values);
        self
    }

    /// Selects the empty set for a facet, so nothing passes.
    pub fn with_none(mut self, facet: Facet) -> Self {
        self.facets.insert(facet, BTreeSet::new());
        self
    }

    /// Replaces the allowed values for a facet.
    pub fn set<I, S>(&mut self, facet: Facet, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: BTreeSet<String> = values.into_iter().map(Into::into).collect();
        self.facets.insert(facet, values);
    }

    /// Drops the constraint on a facet entirely.
    pub fn clear(&mut self, facet: Facet) {
        self.facets.remove(&facet);
    }

    /// The allowed values for a facet, or `None` if the facet is unconstrained.
    pub fn values(&self, facet: Facet) -> Option<&BTreeSet<String>> {
        self.facets.get(&facet)
    }

    /// Facets that carry a constraint.
    pub fn facets(&self) -> impl Iterator<Item = Facet> + '_ {
        self.facets.keys().copied()
    }

    pub fn is_unconstrained(&self) -> bool {
        self.facets.is_empty()
    }

    pub fn allows(&self, facet: Facet, value: &str) -> bool {
        match self.facets.get(&facet) {
            Some(allowed) => allowed.contains(value),
            None => true,
        }
    }

    /// Whether a record passes every constrained facet.
    pub fn matches(&self, record: &Record) -> bool {
        self.facets
            .iter()
            .all(|(facet, allowed)| allowed.contains(facet.value_of(record)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(age_group: &str, gender: &str) -> Record {
        Record {
            age: 30,
            age_group: age_group.to_string(),
            gender: gender.to_string(),
            systolic: 120,
            cholesterol: 190,
            bp_level: "Normal".to_string(),
            cholesterol_level: "Normal".to_string(),
            condition: "None".to_string(),
            visit_date: NaiveDate::from_ymd_opt(2021, 6, 1).unwrap(),
        }
    }

    #[test]
    fn test_unconstrained_selection_matches_everything() {
        let selection = FilterSelection::new();
        assert!(selection.is_unconstrained());
        assert!(selection.matches(&record("18-29", "Male")));
        assert!(selection.allows(Facet::Condition, "anything"));
    }

    #[test]
    fn test_empty_set_matches_nothing() {
        let selection = FilterSelection::new().with_none(Facet::Gender);
        assert!(!selection.matches(&record("18-29", "Male")));
        assert!(!selection.allows(Facet::Gender, "Female"));
        assert!(selection.allows(Facet::AgeGroup, "18-29"));
    }

    #[test]
    fn test_and_across_facets_or_within() {
        let selection = FilterSelection::new()
            .with_values(Facet::AgeGroup, ["18-29", "30-44"])
            .with_values(Facet::Gender, ["Female"]);

        assert!(selection.matches(&record("18-29", "Female")));
        assert!(selection.matches(&record("30-44", "Female")));
        assert!(!selection.matches(&record("18-29", "Male")));
        assert!(!selection.matches(&record("45-59", "Female")));
    }

    #[test]
    fn test_all_covers_selector_domains() {
        let dataset = Dataset::from_records(vec![record("18-29", "Male"), record("60+", "Female")]);
        let selection = FilterSelection::all(&dataset);

        assert_eq!(selection.facets().collect::<Vec<_>>(), vec![Facet::AgeGroup, Facet::Gender]);
        assert_eq!(selection.values(Facet::AgeGroup).map(|v| v.len()), Some(2));
        assert!(selection.values(Facet::Condition).is_none());
    }

    #[test]
    fn test_clear_removes_constraint() {
        let mut selection = FilterSelection::new().with_none(Facet::AgeGroup);
        selection.clear(Facet::AgeGroup);
        assert!(selection.is_unconstrained());
    }

    #[test]
    fn test_equal_selections_are_equal_regardless_of_insertion_order() {
        let a = FilterSelection::new().with_values(Facet::Gender, ["Male", "Female"]);
        let b = FilterSelection::new().with_values(Facet::Gender, ["Female", "Male"]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_serializes_as_facet_map() {
        let selection = FilterSelection::new().with_values(Facet::AgeGroup, ["18-29"]);
        let json = serde_json::to_value(&selection).unwrap();
        assert_eq!(json, serde_json::json!({ "age_group": ["18-29"] }));

        let back: FilterSelection = serde_json::from_value(json).unwrap();
        assert_eq!(back, selection);
    }
}
