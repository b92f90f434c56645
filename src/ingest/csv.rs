use crate::errors::AppResult;
use crate::models::sheet::Sheet;
use std::path::Path;

/// Read a comma-delimited file. Short rows are padded to the header
/// count by the sheet, long rows truncated.
pub(crate) fn read_csv(path: &Path) -> AppResult<Sheet> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_path(path)?;

    let headers = rdr.headers()?.iter().map(str::to_string).collect();
    let mut sheet = Sheet::new(headers);

    for record in rdr.records() {
        let record = record?;
        sheet.push_row(record.iter().map(str::to_string).collect());
    }

    Ok(sheet)
}
