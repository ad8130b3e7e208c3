//! FILENAME: core/analytics-engine/src/aggregation.rs
//! Aggregation Pipeline - The fixed catalogue of dashboard aggregations.
//!
//! Every function here is a pure function of a `FilteredView`. Two policies
//! for categories absent from the view are deliberately kept apart:
//! - 0-fill: `group_count_by_facet`, `high_risk_by_group` and `visits_by_month`
//!   report every known category, with zero where the view has no records.
//!   Category domains come from the unfiltered dataset.
//! - Omit: `boxplot_stats` and `visits_by_year` report only groups that
//!   actually occur in the view.

use std::collections::BTreeMap;

use chrono::Month;
use dataset::{Dataset, Facet, Measure, Record, ValueId};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::accumulator::{Accumulator, Average};
use crate::boxplot::BoxStats;
use crate::filter::FilteredView;

/// Group-key tuple: one value per grouping facet, in grouping order.
pub type GroupKey = SmallVec<[String; 2]>;

/// Interned form of a group key used while counting.
type IdKey = SmallVec<[ValueId; 4]>;

/// Calendar months in display order.
pub const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

// ============================================================================
// RESULT ROWS
// ============================================================================

/// A count for one group of records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupCount {
    pub key: GroupKey,
    pub count: usize,
}

/// Boxplot summary for one group of records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxplotGroup {
    pub key: GroupKey,
    pub stats: BoxStats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthCount {
    /// 1 = January.
    pub month: u32,
    pub name: String,
    pub visits: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearCount {
    pub year: i32,
    pub visits: usize,
}

// ============================================================================
// KPI SCALARS
// ============================================================================

pub fn total_count(view: &FilteredView<'_>) -> usize {
    view.len()
}

pub fn mean_age(view: &FilteredView<'_>) -> Average {
    let acc: Accumulator = view.records().map(|r| r.age as f64).collect();
    acc.mean()
}

pub fn count_where_bp_high(view: &FilteredView<'_>) -> usize {
    view.records().filter(|r| r.is_bp_high()).count()
}

pub fn count_where_chol_borderline_high(view: &FilteredView<'_>) -> usize {
    view.records().filter(|r| r.is_cholesterol_borderline_high()).count()
}

// ============================================================================
// GROUP-BY AGGREGATIONS
// ============================================================================

/// Record count per value of a facet, covering the facet's full dataset domain.
pub fn group_count_by_facet(view: &FilteredView<'_>, facet: Facet) -> Vec<GroupCount> {
    count_by_groups(view, &[facet], |_| true)
}

/// Number of high-risk records per group, 0-filled over the cartesian product
/// of the grouping facets' dataset domains.
pub fn high_risk_by_group(view: &FilteredView<'_>, group_facets: &[Facet]) -> Vec<GroupCount> {
    count_by_groups(view, group_facets, Record::is_high_risk)
}

/// Five-number summary of a measure per group present in the view.
/// Groups are ordered by the dataset domains of the grouping facets.
pub fn boxplot_stats(
    view: &FilteredView<'_>,
    group_facets: &[Facet],
    measure: Measure,
) -> Vec<BoxplotGroup> {
    let dataset = view.dataset();
    let mut values: FxHashMap<IdKey, Vec<f64>> = FxHashMap::default();

    for record in view.records() {
        if let Some(key) = id_key(dataset, group_facets, record) {
            values
                .entry(key)
                .or_default()
                .push(measure.value_of(record) as f64);
        }
    }

    domain_product(dataset, group_facets)
        .into_iter()
        .filter_map(|ids| {
            let group_values = values.remove(&ids)?;
            let stats = BoxStats::from_values(group_values)?;
            Some(BoxplotGroup {
                key: label_key(dataset, group_facets, &ids),
                stats,
            })
        })
        .collect()
}

// ============================================================================
// TIME BUCKETS
// ============================================================================

/// Visits per calendar month: always twelve rows, January first.
pub fn visits_by_month(view: &FilteredView<'_>) -> Vec<MonthCount> {
    let mut counts = [0usize; 12];
    for record in view.records() {
        counts[(record.visit_month() - 1) as usize] += 1;
    }

    MONTHS
        .iter()
        .zip(counts)
        .map(|(month, visits)| MonthCount {
            month: month.number_from_month(),
            name: month.name().to_string(),
            visits,
        })
        .collect()
}

/// Visits per year present in the view, ascending.
pub fn visits_by_year(view: &FilteredView<'_>) -> Vec<YearCount> {
    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for record in view.records() {
        *counts.entry(record.visit_year()).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(year, visits)| YearCount { year, visits })
        .collect()
}

/// Full English name of a month number (1-12).
pub fn month_name(month: u32) -> &'static str {
    MONTHS
        .get(month.wrapping_sub(1) as usize)
        .map(|m| m.name())
        .unwrap_or("")
}

// ============================================================================
// HELPERS
// ============================================================================

/// Counts records satisfying `predicate` per group, 0-filled over the domain product.
fn count_by_groups<F>(view: &FilteredView<'_>, group_facets: &[Facet], predicate: F) -> Vec<GroupCount>
where
    F: Fn(&Record) -> bool,
{
    let dataset = view.dataset();
    let mut counts: FxHashMap<IdKey, usize> = FxHashMap::default();

    for record in view.records() {
        if !predicate(record) {
            continue;
        }
        if let Some(key) = id_key(dataset, group_facets, record) {
            *counts.entry(key).or_insert(0) += 1;
        }
    }

    domain_product(dataset, group_facets)
        .into_iter()
        .map(|ids| GroupCount {
            count: counts.get(&ids).copied().unwrap_or(0),
            key: label_key(dataset, group_facets, &ids),
        })
        .collect()
}

/// Interned key of a record for the given facets.
fn id_key(dataset: &Dataset, facets: &[Facet], record: &Record) -> Option<IdKey> {
    facets
        .iter()
        .map(|&facet| dataset.domain(facet).id_of(facet.value_of(record)))
        .collect()
}

/// Every combination of domain values, first facet outermost, each in first-seen order.
fn domain_product(dataset: &Dataset, facets: &[Facet]) -> Vec<IdKey> {
    let mut keys: Vec<IdKey> = vec![IdKey::new()];
    for &facet in facets {
        let count = dataset.domain(facet).len() as ValueId;
        keys = keys
            .iter()
            .flat_map(|prefix| {
                (0..count).map(move |id| {
                    let mut key = prefix.clone();
                    key.push(id);
                    key
                })
            })
            .collect();
    }
    keys
}

fn label_key(dataset: &Dataset, facets: &[Facet], ids: &[ValueId]) -> GroupKey {
    facets
        .iter()
        .zip(ids)
        .map(|(&facet, &id)| dataset.domain(facet).value(id).unwrap_or_default().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::apply;
    use crate::selection::FilterSelection;
    use chrono::NaiveDate;
    use smallvec::smallvec;

    fn record(age_group: &str, gender: &str, bp: &str, chol: &str, age: i64, ymd: (i32, u32, u32)) -> Record {
        Record {
            age,
            age_group: age_group.to_string(),
            gender: gender.to_string(),
            systolic: 110 + age,
            cholesterol: 150 + age,
            bp_level: bp.to_string(),
            cholesterol_level: chol.to_string(),
            condition: "None".to_string(),
            visit_date: NaiveDate::from_ymd_opt(ymd.0, ymd.1, ymd.2).unwrap(),
        }
    }

    fn sample() -> Dataset {
        Dataset::from_records(vec![
            record("18-29", "Male", "High", "Normal", 22, (2021, 1, 5)),
            record("18-29", "Female", "Normal", "Normal", 27, (2022, 3, 9)),
            record("30-44", "Male", "High", "Borderline High", 40, (2021, 3, 20)),
            record("30-44", "Female", "Normal", "Borderline High", 35, (2023, 12, 1)),
        ])
    }

    fn key(parts: &[&str]) -> GroupKey {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_kpis_over_full_view() {
        let dataset = sample();
        let view = FilteredView::all(&dataset);
        assert_eq!(total_count(&view), 4);
        assert_eq!(mean_age(&view), Average::Value(31.0));
        assert_eq!(count_where_bp_high(&view), 2);
        assert_eq!(count_where_chol_borderline_high(&view), 2);
    }

    #[test]
    fn test_kpis_over_empty_view() {
        let dataset = sample();
        let view = apply(&dataset, &FilterSelection::new().with_none(Facet::Gender));
        assert_eq!(total_count(&view), 0);
        assert_eq!(mean_age(&view), Average::NoData);
        assert_eq!(count_where_bp_high(&view), 0);
        assert_eq!(count_where_chol_borderline_high(&view), 0);
    }

    #[test]
    fn test_group_count_keeps_filtered_out_categories() {
        let dataset = sample();
        let view = apply(&dataset, &FilterSelection::new().with_values(Facet::AgeGroup, ["18-29"]));

        let counts = group_count_by_facet(&view, Facet::AgeGroup);
        assert_eq!(
            counts,
            vec![
                GroupCount { key: key(&["18-29"]), count: 2 },
                GroupCount { key: key(&["30-44"]), count: 0 },
            ]
        );
    }

    #[test]
    fn test_high_risk_by_age_group_and_gender() {
        let dataset = sample();
        let view = FilteredView::all(&dataset);

        let risk = high_risk_by_group(&view, &[Facet::AgeGroup, Facet::Gender]);
        let flat: Vec<(GroupKey, usize)> = risk.into_iter().map(|g| (g.key, g.count)).collect();
        assert_eq!(
            flat,
            vec![
                (key(&["18-29", "Male"]), 1),
                (key(&["18-29", "Female"]), 0),
                (key(&["30-44", "Male"]), 1),
                (key(&["30-44", "Female"]), 1),
            ]
        );
    }

    #[test]
    fn test_high_risk_zero_filled_when_view_empty() {
        let dataset = sample();
        let view = apply(&dataset, &FilterSelection::new().with_none(Facet::AgeGroup));
        let risk = high_risk_by_group(&view, &[Facet::AgeGroup, Facet::Gender]);
        assert_eq!(risk.len(), 4);
        assert!(risk.iter().all(|g| g.count == 0));
    }

    #[test]
    fn test_boxplot_omits_empty_groups() {
        let dataset = sample();
        let view = apply(&dataset, &FilterSelection::new().with_values(Facet::Gender, ["Male"]));

        let boxes = boxplot_stats(&view, &[Facet::AgeGroup, Facet::Gender], Measure::Age);
        let keys: Vec<GroupKey> = boxes.iter().map(|b| b.key.clone()).collect();
        assert_eq!(keys, vec![key(&["18-29", "Male"]), key(&["30-44", "Male"])]);
        assert_eq!(boxes[0].stats.median, 22.0);
        assert_eq!(boxes[1].stats.median, 40.0);
    }

    #[test]
    fn test_boxplot_without_group_facets_summarizes_whole_view() {
        let dataset = sample();
        let view = FilteredView::all(&dataset);
        let boxes = boxplot_stats(&view, &[], Measure::Systolic);
        assert_eq!(boxes.len(), 1);
        assert!(boxes[0].key.is_empty());
        assert_eq!(boxes[0].stats.count, 4);
        assert_eq!(boxes[0].stats.min, 132.0);
        assert_eq!(boxes[0].stats.max, 150.0);
    }

    #[test]
    fn test_boxplot_of_empty_view_is_empty() {
        let dataset = sample();
        let view = apply(&dataset, &FilterSelection::new().with_none(Facet::Gender));
        assert!(boxplot_stats(&view, &[Facet::Condition], Measure::Cholesterol).is_empty());
        assert!(boxplot_stats(&view, &[], Measure::Cholesterol).is_empty());
    }

    #[test]
    fn test_visits_by_month_is_fixed_calendar() {
        let dataset = sample();
        let view = FilteredView::all(&dataset);
        let months = visits_by_month(&view);

        assert_eq!(months.len(), 12);
        assert_eq!(months[0].name, "January");
        assert_eq!(months[11].name, "December");
        let visits: Vec<usize> = months.iter().map(|m| m.visits).collect();
        assert_eq!(visits, vec![1, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(visits.iter().sum::<usize>(), total_count(&view));
    }

    #[test]
    fn test_visits_by_year_ascending_without_zeros() {
        let dataset = Dataset::from_records(vec![
            record("18-29", "Male", "High", "Normal", 22, (2023, 1, 5)),
            record("18-29", "Male", "High", "Normal", 22, (2019, 1, 5)),
            record("18-29", "Male", "High", "Normal", 22, (2023, 6, 5)),
        ]);
        let view = FilteredView::all(&dataset);
        assert_eq!(
            visits_by_year(&view),
            vec![
                YearCount { year: 2019, visits: 1 },
                YearCount { year: 2023, visits: 2 },
            ]
        );
    }

    #[test]
    fn test_month_name_bounds() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(0), "");
        assert_eq!(month_name(13), "");
    }

    #[test]
    fn test_group_key_serializes_as_array() {
        let group = GroupCount { key: smallvec!["18-29".to_string(), "Male".to_string()], count: 3 };
        let json = serde_json::to_value(&group).unwrap();
        assert_eq!(json, serde_json::json!({ "key": ["18-29", "Male"], "count": 3 }));
    }
}
