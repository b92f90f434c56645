//! Aggregations for the presentation collaborator: headline metrics over
//! the full dataset, chart counts over the filtered view.

use crate::models::dataset::Dataset;
use crate::models::record::Equipment;
use crate::models::status::{ALL_STATUSES, CalStatus};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

/// Headline tiles: total plus one count per status.
#[derive(Debug, Clone, Serialize)]
pub struct Metrics {
    pub total: usize,
    pub on_schedule: usize,
    pub due_soon: usize,
    pub overdue: usize,
    pub uncalibrated: usize,
}

impl Metrics {
    pub fn compute(dataset: &Dataset, today: NaiveDate) -> Self {
        let mut m = Metrics {
            total: dataset.len(),
            on_schedule: 0,
            due_soon: 0,
            overdue: 0,
            uncalibrated: 0,
        };

        for rec in &dataset.records {
            match rec.status(today) {
                CalStatus::OnSchedule => m.on_schedule += 1,
                CalStatus::DueSoon => m.due_soon += 1,
                CalStatus::Overdue => m.overdue += 1,
                CalStatus::Uncalibrated => m.uncalibrated += 1,
            }
        }

        m
    }
}

/// One bar of the records-per-status chart.
#[derive(Debug, Clone, Serialize)]
pub struct StatusCount {
    pub status: CalStatus,
    pub count: usize,
}

/// Count per status over a filtered view. Every status is present, in
/// fixed display order, so the chart axis is stable across filters.
pub fn status_counts(view: &[&Equipment], today: NaiveDate) -> Vec<StatusCount> {
    let mut counts: HashMap<CalStatus, usize> = HashMap::new();
    for rec in view {
        *counts.entry(rec.status(today)).or_insert(0) += 1;
    }

    ALL_STATUSES
        .iter()
        .map(|&status| StatusCount {
            status,
            count: counts.get(&status).copied().unwrap_or(0),
        })
        .collect()
}

/// One slice of the records-per-location chart.
#[derive(Debug, Clone, Serialize)]
pub struct LocationSlice {
    pub location: String,
    pub count: usize,
    pub share: f64,
}

/// Proportional breakdown per location over a filtered view, largest
/// first. Empty location cells group under an empty key.
pub fn location_breakdown(dataset: &Dataset, view: &[&Equipment]) -> Vec<LocationSlice> {
    let idx = dataset.cols.location;
    let total = view.len();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for rec in view {
        *counts.entry(rec.cell(idx)).or_insert(0) += 1;
    }

    let mut slices: Vec<LocationSlice> = counts
        .into_iter()
        .map(|(location, count)| LocationSlice {
            location: location.to_string(),
            count,
            share: if total == 0 {
                0.0
            } else {
                count as f64 / total as f64
            },
        })
        .collect();

    slices.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.location.cmp(&b.location)));
    slices
}

/// Chart feed handed to the external charting collaborator.
#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub status_counts: Vec<StatusCount>,
    pub location_breakdown: Vec<LocationSlice>,
}
