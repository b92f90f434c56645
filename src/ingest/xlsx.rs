use crate::errors::{AppError, AppResult};
use crate::models::sheet::Sheet;
use calamine::{Data, Reader, Xlsx, open_workbook};
use chrono::Timelike;
use std::path::Path;

/// Read the first worksheet of an XLSX workbook. The first row is the
/// header row; date cells are stringified as ISO so the normalizer sees
/// the same shape as a CSV source.
pub(crate) fn read_xlsx(path: &Path) -> AppResult<Sheet> {
    let mut workbook: Xlsx<std::io::BufReader<std::fs::File>> =
        open_workbook(path).map_err(|e: calamine::XlsxError| AppError::Xlsx(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::Xlsx("workbook has no worksheets".to_string()))?
        .map_err(|e| AppError::Xlsx(e.to_string()))?;

    let mut rows = range.rows();

    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row.iter().map(cell_to_string).collect(),
        None => return Err(AppError::Xlsx("worksheet is empty".to_string())),
    };

    let mut sheet = Sheet::new(headers);
    for row in rows {
        sheet.push_row(row.iter().map(cell_to_string).collect());
    }

    Ok(sheet)
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            // whole numbers without the trailing ".0"
            if f.fract() == 0.0 && f.abs() < 1e15 {
                format!("{}", *f as i64)
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(dt) if dt.time().num_seconds_from_midnight() == 0 => {
                dt.date().format("%Y-%m-%d").to_string()
            }
            Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => String::new(),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(_) => String::new(),
    }
}
