//! Update-last-calibration operation.

use crate::errors::{AppError, AppResult};
use crate::models::columns::COL_ID;
use crate::models::dataset::Dataset;
use crate::utils::date::format_date;
use chrono::NaiveDate;

/// Set a new last-calibration date on every record whose "ID Alat" cell
/// equals `id`, and recompute the due date of those records only.
/// Returns the number of records touched; zero matches is not an error.
pub fn update_last_calibration(
    dataset: &mut Dataset,
    id: &str,
    new_date: NaiveDate,
) -> AppResult<usize> {
    let id_col = dataset
        .column_index(COL_ID)
        .ok_or_else(|| AppError::Schema {
            missing: vec![COL_ID.to_string()],
        })?;

    let date_col = dataset.cols.last_calibration;
    let mut updated = 0;

    for rec in &mut dataset.records {
        if rec.cell(id_col) != id {
            continue;
        }
        rec.cells[date_col] = format_date(new_date);
        rec.last_calibration = Some(new_date);
        rec.recompute_due_date();
        updated += 1;
    }

    Ok(updated)
}
