//! Ad-hoc cohort comparison

use crate::compare::segment_series;
use crate::core::http::AppState;
use crate::filters::SegmentFilter;
use axum::extract::{Query, State};
use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompareQuery {
    pub metric: Option<String>,
    pub segment_a: Option<String>,
    pub segment_b: Option<String>,
    pub segment_c: Option<String>,
}

/// `GET /api/compare`
///
/// Three independently JSON-encoded segment filters; a filter that fails to
/// decode degrades to an empty filter and matches every call.
pub async fn compare(
    State(state): State<AppState>,
    Query(query): Query<CompareQuery>,
) -> Json<Value> {
    let metric = query.metric.unwrap_or_default();

    let segments = [
        ("Segment A", &query.segment_a),
        ("Segment B", &query.segment_b),
        ("Segment C", &query.segment_c),
    ]
    .into_iter()
    .map(|(label, raw)| {
        (
            label.to_string(),
            SegmentFilter::parse(raw.as_deref().unwrap_or("{}")),
        )
    })
    .collect::<Vec<_>>();

    let series = segment_series(&state.snapshots.calls, &metric, &segments);
    Json(json!({ "series": series }))
}
