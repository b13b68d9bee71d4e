//! Alerts & coaching section

use crate::core::http::AppState;
use crate::data::Table;
use crate::sections::{json_rows, level_compare, time_series};
use axum::extract::State;
use axum::response::Json;
use serde_json::{json, Value};

const FLAG_COLUMNS: [&str; 9] = [
    "disrespectful_language",
    "unfriendly_tone",
    "repeated_mistakes",
    "missed_allergy_disclosure",
    "item_unavailability",
    "discount_requested",
    "coupon_mentioned",
    "guest_complaint",
    "price_objection",
];

/// Tally the Yes/No flag columns across the alert calls. A conversation is
/// "ideal" when none of the three behavioral flags fired.
fn flag_counts(calls: &Table) -> Value {
    let count = |column: &str| {
        calls
            .iter()
            .filter(|row| row.get(column) == Some("Yes"))
            .count()
    };

    let ideal = calls
        .iter()
        .filter(|row| {
            row.get("disrespectful_language") == Some("No")
                && row.get("unfriendly_tone") == Some("No")
                && row.get("repeated_mistakes") == Some("No")
        })
        .count();

    let mut counts = serde_json::Map::new();
    for column in FLAG_COLUMNS {
        counts.insert(column.to_string(), count(column).into());
    }
    counts.insert("ideal_conversations".to_string(), ideal.into());
    Value::Object(counts)
}

/// `GET /api/alerts`
pub async fn alerts(State(state): State<AppState>) -> Json<Value> {
    let snapshots = &state.snapshots;

    Json(json!({
        "kpisTop": [],
        "kpisSecond": [],
        "timeSeries": time_series(&snapshots.alerts_hourly),
        "counts": flag_counts(&snapshots.alerts_calls),
        "callRows": json_rows(&snapshots.alerts_calls),
        "brandFranchiseStoreCompare": level_compare(&snapshots.alerts_level_compare),
    }))
}
