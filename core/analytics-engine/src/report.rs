//! FILENAME: core/analytics-engine/src/report.rs
//! Dashboard Report - Everything the presentation layer needs for one render pass.
//!
//! This module gathers, for a single selection:
//! - Selector options (distinct values of each selector facet)
//! - The four KPI scalars
//! - The tables behind the five analysis sections
//! - The filtered records as a displayable table
//!
//! The report holds plain values only; chart types, layout and labels are
//! decided by the presentation layer.

use dataset::{Dataset, Facet, Measure, Record};
use serde::{Deserialize, Serialize};

use crate::accumulator::Average;
use crate::aggregation::{
    boxplot_stats, count_where_bp_high, count_where_chol_borderline_high, group_count_by_facet,
    high_risk_by_group, mean_age, month_name, total_count, visits_by_month, visits_by_year,
    BoxplotGroup, GroupCount, MonthCount, YearCount,
};
use crate::filter::{apply, FilteredView};
use crate::selection::FilterSelection;

/// Grouping used by the blood pressure, cholesterol and risk sections.
pub const DEMOGRAPHIC_GROUPS: [Facet; 2] = [Facet::AgeGroup, Facet::Gender];

/// Decimals shown for the average age KPI.
pub const AVERAGE_AGE_DECIMALS: u32 = 1;

// ============================================================================
// REPORT SECTIONS
// ============================================================================

/// Selectable values for one filter facet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetOptions {
    pub facet: Facet,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    pub total_patients: usize,
    pub average_age: Average,
    pub high_bp_patients: usize,
    pub high_cholesterol_patients: usize,
}

/// Section 1: who the patients are.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Demographics {
    pub by_age_group: Vec<GroupCount>,
    pub by_gender: Vec<GroupCount>,
}

/// A systolic and a cholesterol boxplot series sharing one grouping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalsBoxplots {
    pub group_facets: Vec<Facet>,
    pub systolic: Vec<BoxplotGroup>,
    pub cholesterol: Vec<BoxplotGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitPatterns {
    pub by_month: Vec<MonthCount>,
    pub by_year: Vec<YearCount>,
}

/// One row of the filtered table, with the derived visit month and year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewRow {
    pub age: i64,
    pub age_group: String,
    pub gender: String,
    pub systolic: i64,
    pub cholesterol: i64,
    pub bp_level: String,
    pub cholesterol_level: String,
    pub condition: String,
    pub visit_date: chrono::NaiveDate,
    pub visit_month: String,
    pub visit_year: i32,
}

impl From<&Record> for PreviewRow {
    fn from(record: &Record) -> Self {
        PreviewRow {
            age: record.age,
            age_group: record.age_group.clone(),
            gender: record.gender.clone(),
            systolic: record.systolic,
            cholesterol: record.cholesterol,
            bp_level: record.bp_level.clone(),
            cholesterol_level: record.cholesterol_level.clone(),
            condition: record.condition.clone(),
            visit_date: record.visit_date,
            visit_month: month_name(record.visit_month()).to_string(),
            visit_year: record.visit_year(),
        }
    }
}

// ============================================================================
// REPORT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    /// The selection this report was computed for.
    pub selection: FilterSelection,
    pub options: Vec<FacetOptions>,
    pub kpis: KpiSummary,
    pub demographics: Demographics,
    /// Section 2: systolic and cholesterol by age group and gender.
    pub vitals_by_demographics: VitalsBoxplots,
    /// Section 3: high-risk patients by age group and gender.
    pub high_risk: Vec<GroupCount>,
    /// Section 4: systolic and cholesterol by condition.
    pub vitals_by_condition: VitalsBoxplots,
    /// Section 5: when patients visit.
    pub visits: VisitPatterns,
    pub table: Vec<PreviewRow>,
}

/// Filters the dataset and computes every section of the dashboard.
pub fn build_report(dataset: &Dataset, selection: &FilterSelection) -> DashboardReport {
    let view = apply(dataset, selection);
    let report = report_for_view(&view, selection);
    log::debug!(
        "Built report: {} of {} records, {} high-risk groups",
        report.kpis.total_patients,
        dataset.len(),
        report.high_risk.len()
    );
    report
}

/// Computes every section from an already filtered view.
pub fn report_for_view(view: &FilteredView<'_>, selection: &FilterSelection) -> DashboardReport {
    let dataset = view.dataset();

    DashboardReport {
        selection: selection.clone(),
        options: Facet::SELECTORS
            .iter()
            .map(|&facet| FacetOptions {
                facet,
                values: dataset.distinct_values(facet).to_vec(),
            })
            .collect(),
        kpis: KpiSummary {
            total_patients: total_count(view),
            average_age: mean_age(view).rounded(AVERAGE_AGE_DECIMALS),
            high_bp_patients: count_where_bp_high(view),
            high_cholesterol_patients: count_where_chol_borderline_high(view),
        },
        demographics: Demographics {
            by_age_group: group_count_by_facet(view, Facet::AgeGroup),
            by_gender: group_count_by_facet(view, Facet::Gender),
        },
        vitals_by_demographics: vitals_boxplots(view, &DEMOGRAPHIC_GROUPS),
        high_risk: high_risk_by_group(view, &DEMOGRAPHIC_GROUPS),
        vitals_by_condition: vitals_boxplots(view, &[Facet::Condition]),
        visits: VisitPatterns {
            by_month: visits_by_month(view),
            by_year: visits_by_year(view),
        },
        table: view.records().map(PreviewRow::from).collect(),
    }
}

fn vitals_boxplots(view: &FilteredView<'_>, group_facets: &[Facet]) -> VitalsBoxplots {
    VitalsBoxplots {
        group_facets: group_facets.to_vec(),
        systolic: boxplot_stats(view, group_facets, Measure::Systolic),
        cholesterol: boxplot_stats(view, group_facets, Measure::Cholesterol),
    }
}
