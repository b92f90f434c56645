//! Compound filtering: categorical multi-selects AND free-text search.

use crate::models::dataset::Dataset;
use crate::models::record::Equipment;
use std::collections::HashSet;

/// Header substrings that mark a column as searchable. "nama" covers the
/// Indonesian headers of the source workbooks, "name" their English
/// counterparts.
const SEARCH_HEADER_KEYS: [&str; 3] = ["id", "nama", "name"];

#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub locations: HashSet<String>,
    pub areas: HashSet<String>,
    pub plants: HashSet<String>,
    pub categories: HashSet<String>,
    pub search: String,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
            && self.areas.is_empty()
            && self.plants.is_empty()
            && self.categories.is_empty()
            && self.search.trim().is_empty()
    }
}

/// Apply the criteria to the dataset, producing a borrowed view.
///
/// An empty set on a dimension means no restriction; dimensions combine
/// with AND. The search-column set is discovered once per pass; if the
/// dataset has no searchable columns the search term is a no-op.
pub fn apply<'a>(dataset: &'a Dataset, criteria: &FilterCriteria) -> Vec<&'a Equipment> {
    let cols = dataset.cols;
    let needle = criteria.search.trim().to_lowercase();
    let search_cols = if needle.is_empty() {
        Vec::new()
    } else {
        search_columns(&dataset.headers)
    };

    dataset
        .records
        .iter()
        .filter(|rec| {
            dimension_pass(&criteria.locations, rec.cell(cols.location))
                && dimension_pass(&criteria.areas, rec.cell(cols.area))
                && dimension_pass(&criteria.plants, rec.cell(cols.plant))
                && dimension_pass(&criteria.categories, rec.cell(cols.category))
                && search_pass(rec, &search_cols, &needle)
        })
        .collect()
}

fn dimension_pass(selected: &HashSet<String>, value: &str) -> bool {
    selected.is_empty() || selected.contains(value)
}

fn search_pass(rec: &Equipment, search_cols: &[usize], needle: &str) -> bool {
    if needle.is_empty() || search_cols.is_empty() {
        return true;
    }
    search_cols
        .iter()
        .any(|&idx| rec.cell(idx).to_lowercase().contains(needle))
}

/// Indices of the columns whose header contains one of the search keys,
/// case-insensitively.
pub fn search_columns(headers: &[String]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .filter(|(_, h)| {
            let h = h.to_lowercase();
            SEARCH_HEADER_KEYS.iter().any(|key| h.contains(key))
        })
        .map(|(idx, _)| idx)
        .collect()
}
