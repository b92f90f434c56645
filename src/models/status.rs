use chrono::{Duration, NaiveDate};
use serde::Serialize;

/// Records whose due date falls within this many days (inclusive) count
/// as due soon.
pub const DUE_SOON_WINDOW_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CalStatus {
    #[serde(rename = "On-Schedule")]
    OnSchedule,
    #[serde(rename = "Due Soon")]
    DueSoon,
    #[serde(rename = "Overdue")]
    Overdue,
    #[serde(rename = "Belum Kalibrasi")]
    Uncalibrated,
}

/// Display order for metrics rows and the status chart.
pub const ALL_STATUSES: [CalStatus; 4] = [
    CalStatus::OnSchedule,
    CalStatus::DueSoon,
    CalStatus::Overdue,
    CalStatus::Uncalibrated,
];

impl CalStatus {
    /// Derive the status of a due date against a reference date.
    ///
    /// Checks run in order: no due date, overdue, due soon, on schedule.
    /// A due date equal to the reference date is already overdue (the due
    /// instant is midnight, the pass runs after it); `due == today + 30d`
    /// is still due soon.
    pub fn derive(due: Option<NaiveDate>, today: NaiveDate) -> Self {
        let Some(due) = due else {
            return CalStatus::Uncalibrated;
        };

        if due <= today {
            CalStatus::Overdue
        } else if due <= today + Duration::days(DUE_SOON_WINDOW_DAYS) {
            CalStatus::DueSoon
        } else {
            CalStatus::OnSchedule
        }
    }

    /// Plain label, used in exports and chart data.
    pub fn label(&self) -> &'static str {
        match self {
            CalStatus::OnSchedule => "On-Schedule",
            CalStatus::DueSoon => "Due Soon",
            CalStatus::Overdue => "Overdue",
            CalStatus::Uncalibrated => "Belum Kalibrasi",
        }
    }

    /// Icon for terminal rendering only, never serialized.
    pub fn icon(&self) -> &'static str {
        match self {
            CalStatus::OnSchedule => "✅",
            CalStatus::DueSoon => "⚠️",
            CalStatus::Overdue => "❌",
            CalStatus::Uncalibrated => "❓",
        }
    }
}

impl std::fmt::Display for CalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
