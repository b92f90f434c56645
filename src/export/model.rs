// src/export/model.rs

use crate::models::columns::{COL_DUE_DATE, COL_STATUS};
use crate::models::dataset::Dataset;
use crate::models::record::Equipment;
use crate::utils::date::format_date;
use chrono::NaiveDate;

/// Header row for rendered/exported tables: every source column plus the
/// two computed ones.
pub(crate) fn table_headers(dataset: &Dataset) -> Vec<String> {
    let mut headers = dataset.headers.clone();
    headers.push(COL_DUE_DATE.to_string());
    headers.push(COL_STATUS.to_string());
    headers
}

/// One table row: the raw cells plus Due Date and Status computed against
/// the pass's reference date.
pub(crate) fn record_to_row(rec: &Equipment, today: NaiveDate) -> Vec<String> {
    let mut row = rec.cells.clone();
    row.push(rec.due_date.map(format_date).unwrap_or_default());
    row.push(rec.status(today).label().to_string());
    row
}

pub(crate) fn dataset_to_table(dataset: &Dataset, today: NaiveDate) -> Vec<Vec<String>> {
    dataset
        .records
        .iter()
        .map(|rec| record_to_row(rec, today))
        .collect()
}
