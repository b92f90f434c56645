#![allow(dead_code)]
use chrono::NaiveDate;
use kalibra::models::sheet::Sheet;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn d(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn sheet_from(headers: &[&str], rows: &[&[&str]]) -> Sheet {
    let mut sheet = Sheet::new(headers.iter().map(|s| s.to_string()).collect());
    for row in rows {
        sheet.push_row(row.iter().map(|s| s.to_string()).collect());
    }
    sheet
}

pub const FULL_HEADERS: [&str; 8] = [
    "ID Alat",
    "Nama Alat",
    "Lokasi",
    "Area",
    "Plant",
    "Kategori",
    "Tanggal Kalibrasi Terakhir",
    "Interval (bulan)",
];

/// Four records covering every status when evaluated at 2024-07-01:
/// EQ-001 due 2024-07-15 (due soon), EQ-002 due 2025-05-01 (on schedule),
/// EQ-003 never calibrated, EQ-004 due 2024-06-20 (overdue).
pub fn sample_sheet() -> Sheet {
    sheet_from(
        &FULL_HEADERS,
        &[
            &[
                "EQ-001",
                "Centrifugal Pump A",
                "Gedung A",
                "Utility",
                "Plant 1",
                "Pompa",
                "2024-01-15",
                "6",
            ],
            &[
                "EQ-002",
                "Valve B",
                "Gedung B",
                "Proses",
                "Plant 1",
                "Valve",
                "2024-05-01",
                "12",
            ],
            &[
                "EQ-003",
                "Pressure Gauge C",
                "Gedung A",
                "Proses",
                "Plant 2",
                "Instrumen",
                "",
                "12",
            ],
            &[
                "EQ-004",
                "Flow Meter D",
                "Gedung C",
                "Utility",
                "Plant 2",
                "Instrumen",
                "2024-05-20",
                "1",
            ],
        ],
    )
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_kalibra.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Create (and clean) a temporary directory for tests that write files.
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_kalibra", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).unwrap();
    path
}
