// src/export/csv.rs

use crate::errors::AppResult;
use crate::export::model::{dataset_to_table, table_headers};
use crate::export::notify_export_success;
use crate::models::dataset::Dataset;
use crate::ui::messages::info;
use chrono::NaiveDate;
use csv::Writer;
use std::path::Path;

/// Write the annotated table (all source columns plus Due Date and
/// Status) as CSV.
pub fn export_table(dataset: &Dataset, today: NaiveDate, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(table_headers(dataset))?;
    for row in dataset_to_table(dataset, today) {
        wtr.write_record(&row)?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
