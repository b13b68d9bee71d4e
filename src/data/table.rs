//! Generic in-memory CSV table

use serde_json::{Map, Value};
use std::path::Path;

/// A flat, read-only table parsed from one CSV snapshot file.
///
/// Cell values are kept as raw strings; numeric coercion happens at the
/// point of use so that each caller gets the casting rules it needs.
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let mut reader = csv::Reader::from_path(path).map_err(|e| {
            Box::new(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("failed to open snapshot {}: {}", path.display(), e),
            )) as Box<dyn std::error::Error + Send + Sync>
        })?;

        let headers = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect::<Vec<_>>();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            // Skip fully empty lines
            if record.iter().all(|cell| cell.trim().is_empty()) {
                continue;
            }
            rows.push(record.iter().map(|cell| cell.to_string()).collect());
        }

        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(move |cells| Row {
            headers: &self.headers,
            cells,
        })
    }

    pub fn row(&self, index: usize) -> Option<Row<'_>> {
        self.rows.get(index).map(|cells| Row {
            headers: &self.headers,
            cells,
        })
    }

    pub fn last_row(&self) -> Option<Row<'_>> {
        if self.rows.is_empty() {
            None
        } else {
            self.row(self.rows.len() - 1)
        }
    }

    /// Distinct non-empty values of one column, in first-seen order.
    pub fn distinct(&self, column: &str) -> Vec<String> {
        let mut seen = Vec::new();
        for row in self.iter() {
            if let Some(value) = row.get(column) {
                if !value.is_empty() && !seen.iter().any(|v| v == value) {
                    seen.push(value.to_string());
                }
            }
        }
        seen
    }
}

/// Borrowed view of one table row.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    headers: &'a [String],
    cells: &'a [String],
}

impl<'a> Row<'a> {
    pub fn get(&self, column: &str) -> Option<&'a str> {
        self.headers
            .iter()
            .position(|h| h == column)
            .and_then(|i| self.cells.get(i))
            .map(|s| s.as_str())
    }

    /// Numeric value of a column, coerced to 0.0 when missing or unparseable.
    pub fn number(&self, column: &str) -> f64 {
        self.get(column)
            .and_then(|v| v.trim().parse::<f64>().ok())
            .unwrap_or(0.0)
    }

    /// Serialize the row with the same casting the original snapshots got
    /// from `cast: true`: cells that parse fully as numbers become numbers.
    pub fn to_json(&self) -> Value {
        let mut map = Map::with_capacity(self.headers.len());
        for (header, cell) in self.headers.iter().zip(self.cells.iter()) {
            map.insert(header.clone(), cast_cell(cell));
        }
        Value::Object(map)
    }

    pub fn columns(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.headers
            .iter()
            .zip(self.cells.iter())
            .map(|(h, c)| (h.as_str(), c.as_str()))
    }
}

/// Cast a raw cell to a JSON scalar: integer, then float, else string.
pub fn cast_cell(cell: &str) -> Value {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return Value::String(String::new());
    }
    if let Ok(int) = trimmed.parse::<i64>() {
        return Value::Number(int.into());
    }
    if let Ok(float) = trimmed.parse::<f64>() {
        if let Some(number) = serde_json::Number::from_f64(float) {
            return Value::Number(number);
        }
    }
    Value::String(cell.to_string())
}
