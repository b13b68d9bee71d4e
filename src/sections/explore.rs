//! Raw call exploration with pagination

use crate::core::http::AppState;
use crate::sections::json_rows;
use axum::extract::{Query, State};
use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExploreQuery {
    pub page: usize,
    pub page_size: usize,
}

impl Default for ExploreQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 50,
        }
    }
}

/// `GET /api/explore`
pub async fn explore(
    State(state): State<AppState>,
    Query(query): Query<ExploreQuery>,
) -> Json<Value> {
    let rows = json_rows(&state.snapshots.explore_calls);
    let total = rows.len();

    let page = query.page.max(1);
    let start = (page - 1).saturating_mul(query.page_size).min(total);
    let end = start.saturating_add(query.page_size).min(total);
    let page_rows = rows[start..end].to_vec();

    Json(json!({
        "rows": page_rows,
        "total": total,
        "page": page,
        "pageSize": query.page_size,
    }))
}
