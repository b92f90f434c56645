//! One interaction cycle: load → normalize → filter → summarize → persist.

use crate::core::filter::{self, FilterCriteria};
use crate::core::normalize::normalize;
use crate::core::summary::{self, ChartData, LocationSlice, Metrics, StatusCount};
use crate::core::update::update_last_calibration;
use crate::errors::AppResult;
use crate::models::dataset::Dataset;
use crate::models::record::Equipment;
use crate::models::sheet::Sheet;
use crate::utils::date;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// The normalized dataset plus the reference date of the current
/// evaluation pass. `today` is captured once and reused for every record,
/// so all rows of one rendering are judged against the same instant; a
/// mutation starts a new pass.
#[derive(Debug)]
pub struct Dashboard {
    pub dataset: Dataset,
    pub today: NaiveDate,
}

impl Dashboard {
    /// Fixed-path load mode. Fails with `MissingFile` when the file does
    /// not exist, `Schema` when required columns are absent.
    pub fn load(path: &Path) -> AppResult<Self> {
        let sheet = crate::ingest::read_sheet(path)?;
        Self::from_sheet(sheet)
    }

    /// Upload path: the collaborator already produced a raw sheet.
    pub fn from_sheet(sheet: Sheet) -> AppResult<Self> {
        Ok(Self {
            dataset: normalize(sheet)?,
            today: date::today(),
        })
    }

    pub fn view(&self, criteria: &FilterCriteria) -> Vec<&Equipment> {
        filter::apply(&self.dataset, criteria)
    }

    pub fn metrics(&self) -> Metrics {
        Metrics::compute(&self.dataset, self.today)
    }

    pub fn status_counts(&self, view: &[&Equipment]) -> Vec<StatusCount> {
        summary::status_counts(view, self.today)
    }

    pub fn location_breakdown(&self, view: &[&Equipment]) -> Vec<LocationSlice> {
        summary::location_breakdown(&self.dataset, view)
    }

    pub fn chart_data(&self, view: &[&Equipment]) -> ChartData {
        ChartData {
            status_counts: self.status_counts(view),
            location_breakdown: self.location_breakdown(view),
        }
    }

    /// Update every record matching `id` and begin a new evaluation pass.
    pub fn update_calibration(&mut self, id: &str, new_date: NaiveDate) -> AppResult<usize> {
        let updated = update_last_calibration(&mut self.dataset, id, new_date)?;
        self.today = date::today();
        Ok(updated)
    }

    /// Serialize the full annotated table to the fixed updated-file name
    /// inside `dir` and return the written path.
    pub fn save_updated(&self, dir: &Path) -> AppResult<PathBuf> {
        let path = dir.join(crate::config::UPDATED_FILE_NAME);
        crate::export::xlsx::export_table(&self.dataset, self.today, &path)?;
        Ok(path)
    }
}
