//! Spreadsheet ingest: CSV and XLSX files become a raw `Sheet`.

mod csv;
mod xlsx;

use crate::errors::{AppError, AppResult};
use crate::models::sheet::Sheet;
use std::path::Path;

/// Read a tabular file, dispatching on its extension.
pub fn read_sheet(path: &Path) -> AppResult<Sheet> {
    if !path.exists() {
        return Err(AppError::MissingFile(path.to_path_buf()));
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "csv" => csv::read_csv(path),
        "xlsx" | "xlsm" => xlsx::read_xlsx(path),
        other => Err(AppError::UnsupportedFormat(other.to_string())),
    }
}
