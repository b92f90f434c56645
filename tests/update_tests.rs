mod common;
use common::{d, sample_sheet, sheet_from};
use kalibra::core::normalize::normalize;
use kalibra::core::update::update_last_calibration;
use kalibra::errors::AppError;

#[test]
fn test_update_sets_date_and_recomputes_due() {
    let mut dataset = normalize(sample_sheet()).unwrap();

    let updated = update_last_calibration(&mut dataset, "EQ-001", d(2024, 8, 1)).unwrap();
    assert_eq!(updated, 1);

    let rec = &dataset.records[0];
    assert_eq!(rec.last_calibration, Some(d(2024, 8, 1)));
    assert_eq!(rec.due_date, Some(d(2025, 2, 1)));
    assert_eq!(rec.cell(dataset.cols.last_calibration), "2024-08-01");
}

#[test]
fn test_update_touches_every_matching_record() {
    let sheet = sheet_from(
        &[
            "ID Alat",
            "Lokasi",
            "Kategori",
            "Tanggal Kalibrasi Terakhir",
            "Interval (bulan)",
        ],
        &[
            &["EQ-DUP", "Gedung A", "Pompa", "2023-01-01", "6"],
            &["EQ-OTHER", "Gedung B", "Valve", "2023-01-01", "6"],
            &["EQ-DUP", "Gedung C", "Pompa", "2023-02-01", "12"],
        ],
    );
    let mut dataset = normalize(sheet).unwrap();

    let updated = update_last_calibration(&mut dataset, "EQ-DUP", d(2024, 3, 10)).unwrap();
    assert_eq!(updated, 2);

    assert_eq!(dataset.records[0].last_calibration, Some(d(2024, 3, 10)));
    assert_eq!(dataset.records[0].due_date, Some(d(2024, 9, 10)));
    // each match keeps its own interval
    assert_eq!(dataset.records[2].last_calibration, Some(d(2024, 3, 10)));
    assert_eq!(dataset.records[2].due_date, Some(d(2025, 3, 10)));
}

#[test]
fn test_update_leaves_other_records_alone() {
    let mut dataset = normalize(sample_sheet()).unwrap();
    let untouched_before = dataset.records[1].clone();

    update_last_calibration(&mut dataset, "EQ-001", d(2024, 8, 1)).unwrap();

    assert_eq!(
        dataset.records[1].last_calibration,
        untouched_before.last_calibration
    );
    assert_eq!(dataset.records[1].due_date, untouched_before.due_date);
    assert_eq!(dataset.records[1].cells, untouched_before.cells);
}

#[test]
fn test_update_with_no_match_is_not_an_error() {
    let mut dataset = normalize(sample_sheet()).unwrap();

    let updated = update_last_calibration(&mut dataset, "EQ-999", d(2024, 8, 1)).unwrap();
    assert_eq!(updated, 0);
}

#[test]
fn test_update_without_id_column_fails() {
    let sheet = sheet_from(
        &[
            "Lokasi",
            "Kategori",
            "Tanggal Kalibrasi Terakhir",
            "Interval (bulan)",
        ],
        &[&["Gedung A", "Pompa", "2024-01-15", "6"]],
    );
    let mut dataset = normalize(sheet).unwrap();

    let err = update_last_calibration(&mut dataset, "EQ-001", d(2024, 8, 1)).unwrap_err();
    match err {
        AppError::Schema { missing } => assert_eq!(missing, vec!["ID Alat".to_string()]),
        other => panic!("expected Schema error, got {other:?}"),
    }
}
