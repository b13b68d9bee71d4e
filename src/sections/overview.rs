//! Call-volume overview section

use crate::core::http::AppState;
use crate::filters::GlobalFilter;
use crate::sections::{level_compare, time_series};
use axum::extract::{Query, State};
use axum::response::Json;
use serde_json::{json, Value};

/// `GET /api/overview`
///
/// Volume KPIs come from the latest hourly row; store rows are narrowed by
/// the global filter. Level-compare rows always carry all three tiers, the
/// client decides which columns to show.
pub async fn overview(
    State(state): State<AppState>,
    Query(filters): Query<GlobalFilter>,
) -> Json<Value> {
    let snapshots = &state.snapshots;

    let store_rows: Vec<Value> = snapshots
        .overview_store
        .iter()
        .filter(|row| filters.matches_row(row))
        .map(|row| row.to_json())
        .collect();

    let latest = snapshots.overview_hourly.last_row();
    let number = |column: &str| latest.map(|row| row.number(column)).unwrap_or(0.0);

    let kpis_volume = json!([
        {
            "id": "total_sessions",
            "label": "Total Sessions",
            "value": number("total_sessions").round() as i64,
        },
        {
            "id": "relevant_conversations",
            "label": "Relevant Conversations",
            "value": number("relevant_conversations").round() as i64,
        },
        {
            "id": "pickup_orders",
            "label": "Pickup Orders",
            "value": number("pickup_orders").round() as i64,
        },
        {
            "id": "order_handle_time",
            "label": "Order Handle Time",
            "value": number("order_handle_time"),
            "suffix": " mins",
            "decimals": 1,
        },
        {
            "id": "average_check",
            "label": "Average Check",
            "value": number("average_check"),
            "suffix": "$",
            "decimals": 2,
        },
    ]);

    Json(json!({
        "kpisVolume": kpis_volume,
        "kpisQuality": [],
        "timeSeries": time_series(&snapshots.overview_hourly),
        "storeRows": store_rows,
        "brandFranchiseStoreCompare": level_compare(&snapshots.overview_level_compare),
    }))
}
