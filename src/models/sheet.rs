//! Raw tabular carrier: ordered string headers plus string-celled rows,
//! as read from a CSV or XLSX source before any interpretation.

#[derive(Debug, Clone, Default)]
pub struct Sheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Sheet {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Index of a column by exact header match.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Append a row, padded or truncated to the header count.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    /// Append a new column filled with `fill` in every row.
    /// Returns the index of the new column.
    pub fn add_column(&mut self, header: &str, fill: &str) -> usize {
        self.headers.push(header.to_string());
        for row in &mut self.rows {
            row.resize(self.headers.len() - 1, String::new());
            row.push(fill.to_string());
        }
        self.headers.len() - 1
    }
}
