// src/export/mod.rs

mod excel_date;
pub mod json;
pub(crate) mod model;

pub mod csv;
pub mod xlsx;

use crate::errors::AppResult;
use crate::models::dataset::Dataset;
use crate::ui::messages::success;
use chrono::NaiveDate;
use std::path::Path;

/// Helper comune per messaggi di completamento export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug)]
pub enum ExportFormat {
    Csv,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}

/// Write the full annotated table in the requested format.
pub fn export_table(
    dataset: &Dataset,
    today: NaiveDate,
    format: ExportFormat,
    path: &Path,
) -> AppResult<()> {
    match format {
        ExportFormat::Csv => csv::export_table(dataset, today, path),
        ExportFormat::Xlsx => xlsx::export_table(dataset, today, path),
    }
}
