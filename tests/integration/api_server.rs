//! Integration tests for the API Server
//!
//! Exercises the HTTP surface end to end against the repo's CSV snapshots.


use serde_json::Value;

use test_utils::TestApiServer;

#[tokio::test]
async fn health_endpoint_reports_healthy_status() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/health").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "callsight-analytics-api");
    assert!(body["uptime_seconds"].as_u64().is_some());
    assert!(body["snapshot_loaded_at"].as_str().is_some());
}

#[tokio::test]
async fn metrics_endpoint_exposes_prometheus_metrics() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/metrics").await;
    assert_eq!(response.status_code(), 200);

    let body = response.text();
    assert!(body.contains("http_requests_total"));
    assert!(body.contains("http_request_duration_seconds"));
    assert!(body.contains("http_requests_in_flight"));
}

#[tokio::test]
async fn filter_options_start_with_the_any_sentinel() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/api/filters").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    for key in [
        "brands",
        "owners",
        "franchiseIds",
        "storeIds",
        "channels",
        "engagementModes",
    ] {
        let options = body[key].as_array().unwrap_or_else(|| panic!("{key} missing"));
        assert_eq!(options[0], "any", "{key} should start with any");
        assert!(options.len() > 1, "{key} should have concrete options");
    }

    assert_eq!(body["brands"][1], "BrandA");
    assert_eq!(
        body["callDates"],
        serde_json::json!(["any", "previous_day", "last_7_days", "last_30_days", "custom"])
    );
}

#[tokio::test]
async fn overview_serves_kpis_series_and_compare_rows() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/api/overview").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();

    let kpis = body["kpisVolume"].as_array().expect("kpisVolume");
    assert_eq!(kpis.len(), 5);
    assert_eq!(kpis[0]["id"], "total_sessions");
    assert_eq!(kpis[0]["value"].as_i64(), Some(204));
    assert_eq!(kpis[4]["suffix"], "$");
    assert!(body["kpisQuality"].as_array().expect("kpisQuality").is_empty());

    let sessions = body["timeSeries"]["total_sessions"]
        .as_array()
        .expect("total_sessions series");
    assert_eq!(sessions.len(), 6);
    assert_eq!(sessions[0]["x"], "08:00");
    assert_eq!(sessions[0]["y"].as_f64(), Some(132.0));

    let compare = body["brandFranchiseStoreCompare"]
        .as_array()
        .expect("compare rows");
    assert_eq!(compare.len(), 4);
    assert_eq!(compare[2]["unit"], "$");
    assert_eq!(compare[2]["brandValue"].as_f64(), Some(12.7));
    // Unitless rows omit the tag entirely
    assert!(compare[0].get("unit").is_none());

    assert_eq!(body["storeRows"].as_array().expect("storeRows").len(), 4);
}

#[tokio::test]
async fn overview_store_rows_respect_the_global_filter() {
    let app = TestApiServer::new().await;

    let by_brand: Value = app
        .server
        .get("/api/overview")
        .add_query_param("brand", "BrandA")
        .await
        .json();
    assert_eq!(by_brand["storeRows"].as_array().expect("rows").len(), 2);

    let by_store: Value = app
        .server
        .get("/api/overview")
        .add_query_param("storeId", "S003")
        .await
        .json();
    let rows = by_store["storeRows"].as_array().expect("rows");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["store_id"], "S003");

    let any: Value = app
        .server
        .get("/api/overview")
        .add_query_param("brand", "any")
        .await
        .json();
    assert_eq!(any["storeRows"].as_array().expect("rows").len(), 4);
}

#[tokio::test]
async fn journey_policy_serves_section_payload() {
    let app = TestApiServer::new().await;
    let body: Value = app.server.get("/api/journey-policy").await.json();

    assert!(body["kpisTop"].as_array().expect("kpisTop").is_empty());
    assert!(body["kpisCheckIn"].as_array().expect("kpisCheckIn").is_empty());
    assert!(body["timeSeries"]["policy_adherence_rate"].is_array());
    assert_eq!(body["storeRows"].as_array().expect("storeRows").len(), 4);
    assert_eq!(
        body["brandFranchiseStoreCompare"][0]["id"],
        "policy_adherence_rate"
    );
}

#[tokio::test]
async fn sales_upsell_serves_item_tables() {
    let app = TestApiServer::new().await;
    let body: Value = app.server.get("/api/sales-upsell").await.json();

    assert!(body["kpis"].as_array().expect("kpis").is_empty());
    for key in ["greetingItems", "cartItems", "upsizeItems"] {
        assert_eq!(body[key].as_array().expect(key).len(), 3, "{key}");
    }
    assert!(body["timeSeries"]["overall_upsell_attempt_pct"].is_array());
}

#[tokio::test]
async fn friendliness_serves_distribution() {
    let app = TestApiServer::new().await;
    let body: Value = app.server.get("/api/friendliness").await.json();

    let distribution = body["distribution"].as_array().expect("distribution");
    assert_eq!(distribution.len(), 5);
    assert_eq!(distribution[0]["value"].as_i64(), Some(14));
    assert!(body["timeSeries"]["friendliness_score"].is_array());
}

#[tokio::test]
async fn alerts_counts_tally_the_flag_columns() {
    let app = TestApiServer::new().await;
    let body: Value = app.server.get("/api/alerts").await.json();

    let counts = &body["counts"];
    assert_eq!(counts["disrespectful_language"].as_i64(), Some(1));
    assert_eq!(counts["unfriendly_tone"].as_i64(), Some(2));
    assert_eq!(counts["repeated_mistakes"].as_i64(), Some(1));
    assert_eq!(counts["guest_complaint"].as_i64(), Some(2));
    assert_eq!(counts["ideal_conversations"].as_i64(), Some(5));

    assert_eq!(body["callRows"].as_array().expect("callRows").len(), 8);
}

#[tokio::test]
async fn explore_paginates_call_rows() {
    let app = TestApiServer::new().await;

    let first: Value = app.server.get("/api/explore").await.json();
    assert_eq!(first["total"].as_i64(), Some(12));
    assert_eq!(first["page"].as_i64(), Some(1));
    assert_eq!(first["pageSize"].as_i64(), Some(50));
    assert_eq!(first["rows"].as_array().expect("rows").len(), 12);

    let second: Value = app
        .server
        .get("/api/explore")
        .add_query_param("page", "2")
        .add_query_param("pageSize", "5")
        .await
        .json();
    let rows = second["rows"].as_array().expect("rows");
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0]["call_id"], "C006");

    let last: Value = app
        .server
        .get("/api/explore")
        .add_query_param("page", "3")
        .add_query_param("pageSize", "5")
        .await
        .json();
    assert_eq!(last["rows"].as_array().expect("rows").len(), 2);
}

#[tokio::test]
async fn compare_returns_three_labeled_series() {
    let app = TestApiServer::new().await;
    let body: Value = app
        .server
        .get("/api/compare")
        .add_query_param("metric", "friendliness_score")
        .await
        .json();

    let series = body["series"].as_array().expect("series");
    assert_eq!(series.len(), 3);
    assert_eq!(series[0]["segmentLabel"], "Segment A");
    assert_eq!(series[1]["segmentLabel"], "Segment B");
    assert_eq!(series[2]["segmentLabel"], "Segment C");
}

#[tokio::test]
async fn compare_filters_each_segment_independently() {
    let app = TestApiServer::new().await;
    let body: Value = app
        .server
        .get("/api/compare")
        .add_query_param("metric", "friendliness_score")
        .add_query_param("segmentA", r#"{"brand":"BrandA"}"#)
        .add_query_param("segmentB", "{}")
        .await
        .json();

    let series = body["series"].as_array().expect("series");

    // BrandA has calls in hours 08..12 only
    let segment_a = series[0]["data"].as_array().expect("segment A");
    assert_eq!(segment_a.len(), 5);
    assert_eq!(segment_a[0]["x"], "08:00");
    let avg = segment_a[0]["y"].as_f64().expect("y");
    assert!((avg - 4.25).abs() < 1e-9);

    // The unfiltered segment picks up the record with no datetime in "00:00"
    let segment_b = series[1]["data"].as_array().expect("segment B");
    assert_eq!(segment_b.len(), 6);
    assert_eq!(segment_b[0]["x"], "00:00");
}

#[tokio::test]
async fn compare_treats_malformed_segments_as_unfiltered() {
    let app = TestApiServer::new().await;
    let body: Value = app
        .server
        .get("/api/compare")
        .add_query_param("metric", "friendliness_score")
        .add_query_param("segmentA", "{not valid json")
        .add_query_param("segmentB", "{}")
        .await
        .json();

    let series = body["series"].as_array().expect("series");
    assert_eq!(series[0]["data"], series[1]["data"]);
}

#[tokio::test]
async fn compare_is_stateless_across_requests() {
    let app = TestApiServer::new().await;

    let mut bodies = Vec::new();
    for _ in 0..2 {
        let body: Value = app
            .server
            .get("/api/compare")
            .add_query_param("metric", "order_handle_time")
            .add_query_param("segmentA", r#"{"storeId":"S003"}"#)
            .await
            .json();
        bodies.push(body);
    }
    assert_eq!(bodies[0], bodies[1]);
}
