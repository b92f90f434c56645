//! Column name constants for the calibration spreadsheet.
//! Header strings must match the source workbook exactly.

/// Required columns. Validation reports every missing one at once.
pub const COL_LAST_CALIBRATION: &str = "Tanggal Kalibrasi Terakhir";
pub const COL_INTERVAL: &str = "Interval (bulan)";
pub const COL_LOCATION: &str = "Lokasi";
pub const COL_CATEGORY: &str = "Kategori";

/// Optional columns, defaulted to "Unknown" when the whole column is absent.
pub const COL_AREA: &str = "Area";
pub const COL_PLANT: &str = "Plant";

/// Optional identity columns, used by search and by the update operation.
pub const COL_ID: &str = "ID Alat";
pub const COL_NAME: &str = "Nama Alat";

/// Columns appended to rendered/exported tables, never stored in the dataset.
pub const COL_DUE_DATE: &str = "Due Date";
pub const COL_STATUS: &str = "Status";

pub const REQUIRED_COLUMNS: [&str; 4] = [
    COL_LAST_CALIBRATION,
    COL_INTERVAL,
    COL_LOCATION,
    COL_CATEGORY,
];

/// Fill value for a wholly absent Area/Plant column.
pub const UNKNOWN: &str = "Unknown";
