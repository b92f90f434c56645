//! Record normalizer: required-column validation, Area/Plant defaulting,
//! tolerant per-cell parsing, due-date computation.

use crate::errors::{AppError, AppResult};
use crate::models::columns::{
    COL_AREA, COL_CATEGORY, COL_INTERVAL, COL_LAST_CALIBRATION, COL_LOCATION, COL_PLANT,
    REQUIRED_COLUMNS, UNKNOWN,
};
use crate::models::dataset::{Columns, Dataset};
use crate::models::record::Equipment;
use crate::models::sheet::Sheet;
use crate::utils::date::parse_date;

/// Validate and normalize a raw sheet into a dataset.
///
/// Fails with `AppError::Schema` listing every missing required column.
/// Area/Plant defaulting is column-level: only a wholly absent column is
/// filled with "Unknown"; blank cells of a present column stay blank.
/// Date and interval cells parse tolerantly; a failed parse makes the
/// derived due date undefined for that record only.
pub fn normalize(mut sheet: Sheet) -> AppResult<Dataset> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|name| sheet.column_index(name).is_none())
        .map(|name| (*name).to_string())
        .collect();

    if !missing.is_empty() {
        return Err(AppError::Schema { missing });
    }

    // Column-level defaulting, before any row processing
    let area = match sheet.column_index(COL_AREA) {
        Some(idx) => idx,
        None => sheet.add_column(COL_AREA, UNKNOWN),
    };
    let plant = match sheet.column_index(COL_PLANT) {
        Some(idx) => idx,
        None => sheet.add_column(COL_PLANT, UNKNOWN),
    };

    let cols = Columns {
        last_calibration: resolved(&sheet, COL_LAST_CALIBRATION)?,
        interval: resolved(&sheet, COL_INTERVAL)?,
        location: resolved(&sheet, COL_LOCATION)?,
        category: resolved(&sheet, COL_CATEGORY)?,
        area,
        plant,
    };

    let width = sheet.headers.len();
    let records = sheet
        .rows
        .into_iter()
        .map(|mut cells| {
            cells.resize(width, String::new());

            let last_calibration = parse_date(&cells[cols.last_calibration]);
            let interval_months = parse_interval(&cells[cols.interval]);

            let mut rec = Equipment {
                cells,
                last_calibration,
                interval_months,
                due_date: None,
            };
            rec.recompute_due_date();
            rec
        })
        .collect();

    Ok(Dataset {
        headers: sheet.headers,
        records,
        cols,
    })
}

fn resolved(sheet: &Sheet, name: &str) -> AppResult<usize> {
    sheet.column_index(name).ok_or_else(|| AppError::Schema {
        missing: vec![name.to_string()],
    })
}

/// Whole-month interval. XLSX numeric cells may arrive as "6.0"; a
/// fractional or non-numeric value is treated as undefined. 0 and
/// negative values pass through unguarded.
fn parse_interval(s: &str) -> Option<i32> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(n) = s.parse::<i32>() {
        return Some(n);
    }

    match s.parse::<f64>() {
        Ok(f) if f.fract() == 0.0 && f >= i32::MIN as f64 && f <= i32::MAX as f64 => Some(f as i32),
        _ => None,
    }
}
