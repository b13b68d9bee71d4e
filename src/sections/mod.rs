//! Dashboard section endpoints
//!
//! One handler per dashboard page, each assembling its response from the
//! shared snapshot store: an hourly time series per metric column, the
//! section's store/call rows, and the brand/franchisee/store level-compare
//! rows. Shapes mirror what the frontend consumes.

pub mod alerts;
pub mod compare;
pub mod explore;
pub mod filters;
pub mod friendliness;
pub mod journey_policy;
pub mod overview;
pub mod sales_upsell;

use crate::data::Table;
use crate::levels::LevelCompareMetric;
use serde_json::{Map, Value};

/// Expand an hourly table into one `[{x, y}]` series per metric column.
pub(crate) fn time_series(table: &Table) -> Value {
    let mut series: Map<String, Value> = Map::new();
    for column in table.headers() {
        if column == "hour" {
            continue;
        }
        series.insert(column.clone(), Value::Array(Vec::new()));
    }

    for row in table.iter() {
        let hour = row.get("hour").unwrap_or_default();
        for column in table.headers() {
            if column == "hour" {
                continue;
            }
            if let Some(Value::Array(points)) = series.get_mut(column) {
                points.push(serde_json::json!({ "x": hour, "y": row.number(column) }));
            }
        }
    }

    Value::Object(series)
}

/// Map a `*_level_compare` table into metric rows.
pub(crate) fn level_compare(table: &Table) -> Vec<LevelCompareMetric> {
    table
        .iter()
        .map(|row| LevelCompareMetric::from_row(&row))
        .collect()
}

/// Serialize every row of a table with numeric casting.
pub(crate) fn json_rows(table: &Table) -> Vec<Value> {
    table.iter().map(|row| row.to_json()).collect()
}
