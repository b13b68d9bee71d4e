//! Call-level record used by segment filtering and hourly aggregation

use crate::data::table::Row;
use std::collections::HashMap;

/// Identity columns lifted out of the raw row; everything else lands in
/// the `metrics` map.
const IDENTITY_COLUMNS: [&str; 8] = [
    "call_datetime",
    "brand",
    "owner",
    "franchise_id",
    "franchisee_id",
    "store_id",
    "channel",
    "engagement_mode",
];

/// One call from the explore snapshot.
///
/// Identity fields are typed; the remaining KPI and Yes/No flag columns are
/// kept as raw strings and coerced to numbers on demand, since the set of
/// metric columns varies by dashboard section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallRecord {
    pub call_datetime: String,
    pub brand: String,
    pub owner: String,
    pub franchise_id: String,
    pub franchisee_id: String,
    pub store_id: String,
    pub channel: String,
    pub engagement_mode: String,
    pub metrics: HashMap<String, String>,
}

impl CallRecord {
    pub fn from_row(row: &Row<'_>) -> Self {
        let mut record = Self {
            call_datetime: row.get("call_datetime").unwrap_or_default().to_string(),
            brand: row.get("brand").unwrap_or_default().to_string(),
            owner: row.get("owner").unwrap_or_default().to_string(),
            franchise_id: row.get("franchise_id").unwrap_or_default().to_string(),
            franchisee_id: row.get("franchisee_id").unwrap_or_default().to_string(),
            store_id: row.get("store_id").unwrap_or_default().to_string(),
            channel: row.get("channel").unwrap_or_default().to_string(),
            engagement_mode: row.get("engagement_mode").unwrap_or_default().to_string(),
            metrics: HashMap::new(),
        };
        for (column, cell) in row.columns() {
            if !IDENTITY_COLUMNS.contains(&column) {
                record.metrics.insert(column.to_string(), cell.to_string());
            }
        }
        record
    }

    /// Numeric value of a metric column, coerced to 0.0 when the column is
    /// missing or does not parse as a number (Yes/No flags included).
    pub fn metric(&self, key: &str) -> f64 {
        self.metrics
            .get(key)
            .and_then(|v| v.trim().parse::<f64>().ok())
            .unwrap_or(0.0)
    }
}
