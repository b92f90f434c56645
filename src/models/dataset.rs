use crate::models::record::Equipment;

/// Resolved indices of the interpreted columns, captured once after
/// normalization (Area/Plant are guaranteed to exist by then).
#[derive(Debug, Clone, Copy)]
pub struct Columns {
    pub last_calibration: usize,
    pub interval: usize,
    pub location: usize,
    pub category: usize,
    pub area: usize,
    pub plant: usize,
}

/// The normalized equipment table. Loaded wholesale, replaced on the next
/// load; the only mutation path is the update-calibration operation.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub records: Vec<Equipment>,
    pub cols: Columns,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Distinct non-empty values of a column, sorted. Feed for the
    /// collaborator's filter widgets.
    pub fn distinct_values(&self, idx: usize) -> Vec<String> {
        let mut values: Vec<String> = self
            .records
            .iter()
            .map(|r| r.cell(idx))
            .filter(|v| !v.trim().is_empty())
            .map(str::to_string)
            .collect();
        values.sort();
        values.dedup();
        values
    }
}
