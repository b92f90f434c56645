//! Plain-text table rendering for terminal output.

use crate::models::dataset::Dataset;
use crate::models::record::Equipment;
use chrono::NaiveDate;
use unicode_width::UnicodeWidthStr;

pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        // Column widths from header and cell contents
        let mut widths: Vec<usize> = self
            .headers
            .iter()
            .map(|h| UnicodeWidthStr::width(h.as_str()))
            .collect();

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(UnicodeWidthStr::width(cell.as_str()));
            }
        }

        let mut out = String::new();

        for (i, h) in self.headers.iter().enumerate() {
            out.push_str(&pad(h, widths[i]));
            out.push(' ');
        }
        out.push('\n');

        for w in &widths {
            out.push_str(&"-".repeat(*w));
            out.push(' ');
        }
        out.push('\n');

        for row in &self.rows {
            for (i, w) in widths.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                out.push_str(&pad(cell, *w));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}

fn pad(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    let mut out = String::from(s);
    for _ in w..width {
        out.push(' ');
    }
    out
}

/// Render a filtered view with the computed Due Date and Status columns,
/// status shown as icon plus label.
pub fn render_view(dataset: &Dataset, view: &[&Equipment], today: NaiveDate) -> String {
    let mut table = Table::new(crate::export::model::table_headers(dataset));

    for rec in view {
        let mut row = crate::export::model::record_to_row(rec, today);
        let status = rec.status(today);
        if let Some(last) = row.last_mut() {
            *last = format!("{} {}", status.icon(), status.label());
        }
        table.add_row(row);
    }

    table.render()
}
