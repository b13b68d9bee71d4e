//! Filter dropdown options

use crate::core::http::AppState;
use axum::extract::State;
use axum::response::Json;
use serde_json::{json, Value};

fn with_any(mut values: Vec<String>) -> Vec<String> {
    values.insert(0, "any".to_string());
    values
}

/// `GET /api/filters`
///
/// Distinct values of each filterable column from the explore snapshot,
/// each list prefixed with the `"any"` sentinel.
pub async fn filter_options(State(state): State<AppState>) -> Json<Value> {
    let calls = &state.snapshots.explore_calls;

    Json(json!({
        "brands": with_any(calls.distinct("brand")),
        "owners": with_any(calls.distinct("owner")),
        "franchiseIds": with_any(calls.distinct("franchise_id")),
        "storeIds": with_any(calls.distinct("store_id")),
        "channels": with_any(calls.distinct("channel")),
        "engagementModes": with_any(calls.distinct("engagement_mode")),
        "callDates": ["any", "previous_day", "last_7_days", "last_30_days", "custom"],
    }))
}
