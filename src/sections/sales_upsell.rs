//! Sales & upsell section

use crate::core::http::AppState;
use crate::sections::{json_rows, level_compare, time_series};
use axum::extract::State;
use axum::response::Json;
use serde_json::{json, Value};

/// `GET /api/sales-upsell`
pub async fn sales_upsell(State(state): State<AppState>) -> Json<Value> {
    let snapshots = &state.snapshots;

    Json(json!({
        "kpis": [],
        "timeSeries": time_series(&snapshots.sales_upsell_hourly),
        "greetingItems": json_rows(&snapshots.sales_upsell_items_greeting),
        "cartItems": json_rows(&snapshots.sales_upsell_items_cart),
        "upsizeItems": json_rows(&snapshots.sales_upsell_items_upsize),
        "storeRows": json_rows(&snapshots.sales_upsell_store),
        "brandFranchiseStoreCompare": level_compare(&snapshots.sales_upsell_level_compare),
    }))
}
