//! Guest journey & policy adherence section

use crate::core::http::AppState;
use crate::sections::{json_rows, level_compare, time_series};
use axum::extract::State;
use axum::response::Json;
use serde_json::{json, Value};

/// `GET /api/journey-policy`
pub async fn journey_policy(State(state): State<AppState>) -> Json<Value> {
    let snapshots = &state.snapshots;

    Json(json!({
        "kpisTop": [],
        "kpisCheckIn": [],
        "timeSeries": time_series(&snapshots.journey_policy_hourly),
        "storeRows": json_rows(&snapshots.journey_policy_store),
        "brandFranchiseStoreCompare": level_compare(&snapshots.journey_policy_level_compare),
    }))
}
