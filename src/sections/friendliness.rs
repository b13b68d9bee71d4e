//! Friendliness & sentiment section

use crate::core::http::AppState;
use crate::sections::{json_rows, level_compare, time_series};
use axum::extract::State;
use axum::response::Json;
use serde_json::{json, Value};

/// `GET /api/friendliness`
pub async fn friendliness(State(state): State<AppState>) -> Json<Value> {
    let snapshots = &state.snapshots;

    Json(json!({
        "kpis": [],
        "timeSeries": time_series(&snapshots.friendliness_hourly),
        "distribution": json_rows(&snapshots.friendliness_distribution),
        "storeRows": json_rows(&snapshots.friendliness_store),
        "brandFranchiseStoreCompare": level_compare(&snapshots.friendliness_level_compare),
    }))
}
