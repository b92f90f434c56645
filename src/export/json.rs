// src/export/json.rs

use crate::core::summary::ChartData;
use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Write the chart feed as pretty JSON for the charting collaborator.
pub fn export_chart_data(charts: &ChartData, path: &Path) -> AppResult<()> {
    info(format!("Exporting chart data to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(charts)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}
