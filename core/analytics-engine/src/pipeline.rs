//! FILENAME: core/analytics-engine/src/pipeline.rs
//! PURPOSE: Names every aggregation so callers can request a subset and run it
//! against one filtered view.
//! CONTEXT: Aggregations are independent; the order of requests only decides
//! the order of the returned results.

use dataset::{Facet, Measure};
use serde::{Deserialize, Serialize};

use crate::accumulator::Average;
use crate::aggregation::{
    boxplot_stats, count_where_bp_high, count_where_chol_borderline_high, group_count_by_facet,
    high_risk_by_group, mean_age, total_count, visits_by_month, visits_by_year, BoxplotGroup,
    GroupCount, MonthCount, YearCount,
};
use crate::filter::FilteredView;

/// The catalogue of available aggregations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum Aggregation {
    TotalCount,
    MeanAge,
    CountWhereBpHigh,
    CountWhereCholBorderlineHigh,
    GroupCountByFacet { facet: Facet },
    BoxplotStats { group_facets: Vec<Facet>, measure: Measure },
    HighRiskByGroup { group_facets: Vec<Facet> },
    VisitsByMonth,
    VisitsByYear,
}

/// Output of a single aggregation: a scalar or an ordered table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum AggregateResult {
    Count(usize),
    Average(Average),
    GroupCounts(Vec<GroupCount>),
    Boxplots(Vec<BoxplotGroup>),
    Months(Vec<MonthCount>),
    Years(Vec<YearCount>),
}

/// An aggregation paired with its result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedResult {
    pub aggregation: Aggregation,
    pub result: AggregateResult,
}

impl Aggregation {
    /// The four top-level KPI aggregations, in display order.
    pub fn kpis() -> [Aggregation; 4] {
        [
            Aggregation::TotalCount,
            Aggregation::MeanAge,
            Aggregation::CountWhereBpHigh,
            Aggregation::CountWhereCholBorderlineHigh,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Aggregation::TotalCount => "total_count",
            Aggregation::MeanAge => "mean_age",
            Aggregation::CountWhereBpHigh => "count_where_bp_high",
            Aggregation::CountWhereCholBorderlineHigh => "count_where_chol_borderline_high",
            Aggregation::GroupCountByFacet { .. } => "group_count_by_facet",
            Aggregation::BoxplotStats { .. } => "boxplot_stats",
            Aggregation::HighRiskByGroup { .. } => "high_risk_by_group",
            Aggregation::VisitsByMonth => "visits_by_month",
            Aggregation::VisitsByYear => "visits_by_year",
        }
    }

    pub fn run(&self, view: &FilteredView<'_>) -> AggregateResult {
        match self {
            Aggregation::TotalCount => AggregateResult::Count(total_count(view)),
            Aggregation::MeanAge => AggregateResult::Average(mean_age(view)),
            Aggregation::CountWhereBpHigh => AggregateResult::Count(count_where_bp_high(view)),
            Aggregation::CountWhereCholBorderlineHigh => {
                AggregateResult::Count(count_where_chol_borderline_high(view))
            }
            Aggregation::GroupCountByFacet { facet } => {
                AggregateResult::GroupCounts(group_count_by_facet(view, *facet))
            }
            Aggregation::BoxplotStats { group_facets, measure } => {
                AggregateResult::Boxplots(boxplot_stats(view, group_facets, *measure))
            }
            Aggregation::HighRiskByGroup { group_facets } => {
                AggregateResult::GroupCounts(high_risk_by_group(view, group_facets))
            }
            Aggregation::VisitsByMonth => AggregateResult::Months(visits_by_month(view)),
            Aggregation::VisitsByYear => AggregateResult::Years(visits_by_year(view)),
        }
    }
}

/// Runs each requested aggregation against the view, in request order.
pub fn run_pipeline(view: &FilteredView<'_>, requests: &[Aggregation]) -> Vec<NamedResult> {
    log::debug!("Running {} aggregations over {} records", requests.len(), view.len());
    requests
        .iter()
        .map(|aggregation| NamedResult {
            aggregation: aggregation.clone(),
            result: aggregation.run(view),
        })
        .collect()
}
