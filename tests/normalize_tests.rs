mod common;
use common::{d, sample_sheet, sheet_from};
use kalibra::core::normalize::normalize;
use kalibra::errors::AppError;

#[test]
fn test_missing_required_columns_are_all_reported() {
    let sheet = sheet_from(&["ID Alat", "Lokasi"], &[&["EQ-001", "Gedung A"]]);

    let err = normalize(sheet).unwrap_err();
    match err {
        AppError::Schema { missing } => {
            assert_eq!(
                missing,
                vec![
                    "Tanggal Kalibrasi Terakhir".to_string(),
                    "Interval (bulan)".to_string(),
                    "Kategori".to_string(),
                ]
            );
        }
        other => panic!("expected Schema error, got {other:?}"),
    }
}

#[test]
fn test_absent_area_and_plant_columns_get_unknown_everywhere() {
    let sheet = sheet_from(
        &[
            "ID Alat",
            "Nama Alat",
            "Lokasi",
            "Kategori",
            "Tanggal Kalibrasi Terakhir",
            "Interval (bulan)",
        ],
        &[
            &["EQ-001", "Pump A", "Gedung A", "Pompa", "2024-01-15", "6"],
            &["EQ-002", "Valve B", "Gedung B", "Valve", "2024-05-01", "12"],
        ],
    );

    let dataset = normalize(sheet).unwrap();

    for rec in &dataset.records {
        assert_eq!(rec.cell(dataset.cols.area), "Unknown");
        assert_eq!(rec.cell(dataset.cols.plant), "Unknown");
    }
}

#[test]
fn test_present_area_column_keeps_blank_cells_blank() {
    let mut sheet = sample_sheet();
    // blank out one Area cell
    sheet.rows[1][3] = String::new();

    let dataset = normalize(sheet).unwrap();

    assert_eq!(dataset.records[0].cell(dataset.cols.area), "Utility");
    assert_eq!(dataset.records[1].cell(dataset.cols.area), "");
}

#[test]
fn test_due_date_is_last_calibration_plus_interval_months() {
    let dataset = normalize(sample_sheet()).unwrap();

    assert_eq!(dataset.records[0].last_calibration, Some(d(2024, 1, 15)));
    assert_eq!(dataset.records[0].due_date, Some(d(2024, 7, 15)));
    assert_eq!(dataset.records[1].due_date, Some(d(2025, 5, 1)));
}

#[test]
fn test_month_end_clamping() {
    let sheet = sheet_from(
        &[
            "Lokasi",
            "Kategori",
            "Tanggal Kalibrasi Terakhir",
            "Interval (bulan)",
        ],
        &[
            &["Gedung A", "Pompa", "2024-01-31", "1"],
            &["Gedung A", "Pompa", "2023-01-31", "1"],
            &["Gedung A", "Pompa", "2024-08-31", "3"],
        ],
    );

    let dataset = normalize(sheet).unwrap();

    // 2024 is a leap year
    assert_eq!(dataset.records[0].due_date, Some(d(2024, 2, 29)));
    assert_eq!(dataset.records[1].due_date, Some(d(2023, 2, 28)));
    assert_eq!(dataset.records[2].due_date, Some(d(2024, 11, 30)));
}

#[test]
fn test_unparseable_or_empty_date_is_tolerated() {
    let sheet = sheet_from(
        &[
            "Lokasi",
            "Kategori",
            "Tanggal Kalibrasi Terakhir",
            "Interval (bulan)",
        ],
        &[
            &["Gedung A", "Pompa", "", "6"],
            &["Gedung A", "Pompa", "not a date", "6"],
            &["Gedung A", "Pompa", "2024-01-15", "6"],
        ],
    );

    let dataset = normalize(sheet).unwrap();

    assert_eq!(dataset.records[0].last_calibration, None);
    assert_eq!(dataset.records[0].due_date, None);
    assert_eq!(dataset.records[1].last_calibration, None);
    assert_eq!(dataset.records[1].due_date, None);
    assert_eq!(dataset.records[2].due_date, Some(d(2024, 7, 15)));
}

#[test]
fn test_interval_accepts_xlsx_style_floats() {
    let sheet = sheet_from(
        &[
            "Lokasi",
            "Kategori",
            "Tanggal Kalibrasi Terakhir",
            "Interval (bulan)",
        ],
        &[
            &["Gedung A", "Pompa", "2024-01-15", "6.0"],
            &["Gedung A", "Pompa", "2024-01-15", "six"],
        ],
    );

    let dataset = normalize(sheet).unwrap();

    assert_eq!(dataset.records[0].interval_months, Some(6));
    assert_eq!(dataset.records[0].due_date, Some(d(2024, 7, 15)));
    // non-numeric interval leaves the due date undefined for that row only
    assert_eq!(dataset.records[1].interval_months, None);
    assert_eq!(dataset.records[1].due_date, None);
}

#[test]
fn test_alternate_date_formats_parse() {
    let sheet = sheet_from(
        &[
            "Lokasi",
            "Kategori",
            "Tanggal Kalibrasi Terakhir",
            "Interval (bulan)",
        ],
        &[
            &["Gedung A", "Pompa", "15/01/2024", "6"],
            &["Gedung A", "Pompa", "2024/01/15", "6"],
            &["Gedung A", "Pompa", "2024-01-15 00:00:00", "6"],
        ],
    );

    let dataset = normalize(sheet).unwrap();

    for rec in &dataset.records {
        assert_eq!(rec.last_calibration, Some(d(2024, 1, 15)));
    }
}

#[test]
fn test_short_rows_are_padded() {
    let mut sheet = sheet_from(
        &[
            "Lokasi",
            "Kategori",
            "Tanggal Kalibrasi Terakhir",
            "Interval (bulan)",
        ],
        &[],
    );
    // bypass push_row padding on purpose
    sheet.rows.push(vec!["Gedung A".to_string()]);

    let dataset = normalize(sheet).unwrap();

    assert_eq!(dataset.records[0].cell(dataset.cols.category), "");
    assert_eq!(dataset.records[0].last_calibration, None);
    assert_eq!(dataset.records[0].due_date, None);
}
