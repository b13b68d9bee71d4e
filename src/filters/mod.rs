//! Global and segment filter types plus row/record matching
//!
//! Both filter shapes treat the sentinel `"any"` (and empty strings) as
//! "no constraint". The franchise constraint matches either of the two
//! franchise id columns, since the snapshot sections disagree on the
//! column name (`franchise_id` vs `franchisee_id`).

use crate::data::{CallRecord, Row};
use serde::{Deserialize, Serialize};

/// Currently selected dashboard-wide filter, as sent on the query string.
///
/// The `call_date_*` fields are accepted on the wire but impose no row
/// constraint; the snapshots are single-day extracts.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GlobalFilter {
    pub brand: Option<String>,
    pub owner: Option<String>,
    pub franchise_id: Option<String>,
    pub store_id: Option<String>,
    pub channel: Option<String>,
    pub engagement_mode: Option<String>,
    pub call_date_operator: Option<String>,
    pub call_date_from: Option<String>,
    pub call_date_to: Option<String>,
    pub call_date_quantity: Option<u32>,
    pub call_date_unit: Option<String>,
}

/// A selected filter value, ignoring the `"any"` sentinel and empty strings.
pub fn concrete(value: &Option<String>) -> Option<&str> {
    match value.as_deref() {
        Some(v) if !v.is_empty() && v != "any" => Some(v),
        _ => None,
    }
}

impl GlobalFilter {
    /// Whether a store-table row passes every selected constraint.
    pub fn matches_row(&self, row: &Row<'_>) -> bool {
        let field = |column: &str| row.get(column).unwrap_or_default();

        if let Some(brand) = concrete(&self.brand) {
            if field("brand") != brand {
                return false;
            }
        }
        if let Some(owner) = concrete(&self.owner) {
            if field("owner") != owner {
                return false;
            }
        }
        if let Some(franchise) = concrete(&self.franchise_id) {
            if field("franchise_id") != franchise && field("franchisee_id") != franchise {
                return false;
            }
        }
        if let Some(store) = concrete(&self.store_id) {
            if field("store_id") != store {
                return false;
            }
        }
        if let Some(channel) = concrete(&self.channel) {
            if field("channel") != channel {
                return false;
            }
        }
        if let Some(mode) = concrete(&self.engagement_mode) {
            if field("engagement_mode") != mode {
                return false;
            }
        }
        true
    }
}

/// Independent cohort filter for the compare view, decoded from a
/// JSON-serialized query parameter. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SegmentFilter {
    pub brand: Option<String>,
    pub franchise_id: Option<String>,
    pub store_id: Option<String>,
    pub engagement: Option<String>,
    pub channel: Option<String>,
}

impl SegmentFilter {
    /// Decode a JSON-encoded segment filter. Malformed input degrades to an
    /// empty filter (matches everything) rather than an error.
    pub fn parse(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }

    /// Whether a call passes every defined constraint. An empty filter
    /// matches every record.
    pub fn matches(&self, record: &CallRecord) -> bool {
        if let Some(brand) = concrete(&self.brand) {
            if record.brand != brand {
                return false;
            }
        }
        if let Some(franchise) = concrete(&self.franchise_id) {
            if record.franchise_id != franchise && record.franchisee_id != franchise {
                return false;
            }
        }
        if let Some(store) = concrete(&self.store_id) {
            if record.store_id != store {
                return false;
            }
        }
        if let Some(engagement) = concrete(&self.engagement) {
            if record.engagement_mode != engagement {
                return false;
            }
        }
        if let Some(channel) = concrete(&self.channel) {
            if record.channel != channel {
                return false;
            }
        }
        true
    }
}
