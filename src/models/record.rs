use crate::models::status::CalStatus;
use crate::utils::date::add_months;
use chrono::NaiveDate;

/// One normalized equipment row.
///
/// `cells` keeps every source column (aligned with `Dataset::headers`,
/// including columns the engine does not interpret) so that search,
/// rendering and export see the full table. The typed fields are parsed
/// once at normalization time; status is never stored, it is derived from
/// `due_date` and the reference date of the current pass.
#[derive(Debug, Clone)]
pub struct Equipment {
    pub cells: Vec<String>,
    pub last_calibration: Option<NaiveDate>,
    pub interval_months: Option<i32>,
    pub due_date: Option<NaiveDate>,
}

impl Equipment {
    pub fn cell(&self, idx: usize) -> &str {
        self.cells.get(idx).map(String::as_str).unwrap_or("")
    }

    pub fn status(&self, today: NaiveDate) -> CalStatus {
        CalStatus::derive(self.due_date, today)
    }

    /// Recompute the due date from the current calibration date and
    /// interval. Undefined when either is undefined.
    pub fn recompute_due_date(&mut self) {
        self.due_date = match (self.last_calibration, self.interval_months) {
            (Some(last), Some(months)) => add_months(last, months),
            _ => None,
        };
    }
}
