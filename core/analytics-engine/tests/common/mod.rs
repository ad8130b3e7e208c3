//! FILENAME: tests/common/mod.rs
//! Fixtures for analytics-engine integration tests.

#![allow(dead_code)]

use analytics_engine::FilterSelection;
use chrono::NaiveDate;
use dataset::{Dataset, Facet, Record};

/// Twelve visits spread over age groups, genders, conditions, months and years.
pub struct PatientFixture;

impl PatientFixture {
    pub fn age_groups() -> Vec<&'static str> {
        vec!["18-29", "30-44", "45-59", "60+"]
    }

    pub fn genders() -> Vec<&'static str> {
        vec!["Male", "Female"]
    }

    /// (age, age_group, gender, systolic, cholesterol, bp_level, cholesterol_level, condition, date)
    #[allow(clippy::type_complexity)]
    pub fn data() -> Vec<(i64, &'static str, &'static str, i64, i64, &'static str, &'static str, &'static str, &'static str)> {
        vec![
            (24, "18-29", "Male", 118, 172, "Normal", "Normal", "None", "2021-01-12"),
            (27, "18-29", "Female", 112, 165, "Normal", "Normal", "Asthma", "2021-02-03"),
            (33, "30-44", "Male", 142, 205, "High", "Borderline High", "Hypertension", "2021-02-20"),
            (38, "30-44", "Female", 125, 199, "Normal", "Normal", "None", "2022-05-07"),
            (41, "30-44", "Male", 151, 214, "High", "Borderline High", "Diabetes", "2022-05-30"),
            (47, "45-59", "Female", 139, 208, "Normal", "Borderline High", "Diabetes", "2022-08-15"),
            (52, "45-59", "Male", 158, 221, "High", "Borderline High", "Hypertension", "2022-11-02"),
            (55, "45-59", "Female", 121, 188, "Normal", "Normal", "Asthma", "2023-01-25"),
            (63, "60+", "Male", 166, 236, "High", "Borderline High", "Heart Disease", "2023-03-09"),
            (68, "60+", "Female", 147, 219, "High", "Borderline High", "Hypertension", "2023-07-18"),
            (71, "60+", "Male", 135, 195, "Normal", "Normal", "Arthritis", "2023-12-01"),
            (29, "18-29", "Male", 205, 180, "High", "Normal", "None", "2024-12-24"),
        ]
    }

    pub fn records() -> Vec<Record> {
        Self::data()
            .into_iter()
            .map(|(age, age_group, gender, systolic, cholesterol, bp, chol, condition, date)| Record {
                age,
                age_group: age_group.to_string(),
                gender: gender.to_string(),
                systolic,
                cholesterol,
                bp_level: bp.to_string(),
                cholesterol_level: chol.to_string(),
                condition: condition.to_string(),
                visit_date: NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("fixture date"),
            })
            .collect()
    }

    pub fn dataset() -> Dataset {
        Dataset::from_records(Self::records())
    }

    /// A representative spread of selections, including degenerate ones.
    pub fn selections(dataset: &Dataset) -> Vec<FilterSelection> {
        vec![
            FilterSelection::new(),
            FilterSelection::all(dataset),
            FilterSelection::new().with_values(Facet::AgeGroup, ["18-29"]),
            FilterSelection::new()
                .with_values(Facet::AgeGroup, ["30-44", "60+"])
                .with_values(Facet::Gender, ["Female"]),
            FilterSelection::new().with_values(Facet::Gender, ["Male"]),
            FilterSelection::new().with_none(Facet::AgeGroup),
            FilterSelection::new().with_none(Facet::Gender),
            FilterSelection::new().with_values(Facet::Condition, ["Hypertension", "Diabetes"]),
        ]
    }
}

/// Builds a record with only the facets the three-record example cares about.
pub fn minimal_record(age_group: &str, gender: &str, bp_level: &str) -> Record {
    Record {
        age: 30,
        age_group: age_group.to_string(),
        gender: gender.to_string(),
        systolic: 120,
        cholesterol: 180,
        bp_level: bp_level.to_string(),
        cholesterol_level: "Normal".to_string(),
        condition: "None".to_string(),
        visit_date: NaiveDate::from_ymd_opt(2022, 6, 1).expect("valid date"),
    }
}
