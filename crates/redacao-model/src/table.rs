use serde::{Deserialize, Serialize};

use crate::error::{Result, SchemaError};

/// An in-memory delimited dataset: one header row plus data rows.
///
/// Cells are stored as trimmed strings and the empty string marks a
/// missing value. Headers are unique and whitespace-trimmed; ingest
/// enforces both before a `Table` is built. Row order is preserved by
/// every operation downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Create an empty table, rejecting duplicate header names.
    pub fn new(headers: Vec<String>) -> Result<Self> {
        for (idx, header) in headers.iter().enumerate() {
            if headers[..idx].iter().any(|seen| seen == header) {
                return Err(SchemaError::DuplicateColumn(header.clone()));
            }
        }
        Ok(Self {
            headers,
            rows: Vec::new(),
        })
    }

    /// Append a row, padding or truncating it to the header width.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Cell content, or the empty string when the row is short.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map_or("", String::as_str)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Parse a cell as a category code. Missing or non-integer cells
/// yield `None` and are treated as matching no category.
pub fn parse_code(cell: &str) -> Option<i64> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}
