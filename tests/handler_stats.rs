mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use serde_json::Value;
use shortlink_registry::api::handlers::{stats_handler, stats_list_handler};
use shortlink_registry::domain::entities::{NewEntry, RequestContext};
use shortlink_registry::state::AppState;

fn server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/shorturls/{code}", get(stats_handler))
        .route("/api/all-urls", get(stats_list_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_stats_success() {
    let ctx = common::create_test_state();
    let registry = ctx.state.registry.clone();
    registry
        .create(
            NewEntry::new("https://example.com/stats")
                .with_validity(45)
                .with_custom_code("stats1"),
        )
        .unwrap();

    for agent in ["agent-a", "agent-b"] {
        registry
            .resolve(
                "stats1",
                RequestContext::new(Some(agent), None, Some("10.0.0.1".to_string())),
            )
            .unwrap();
    }

    let server = server(ctx.state);
    let response = server.get("/shorturls/stats1").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["shortCode"], "stats1");
    assert_eq!(json["originalUrl"], "https://example.com/stats");
    assert_eq!(json["validity"], 45);
    assert_eq!(json["totalClicks"], 2);
    assert!(json["createdAt"].is_string());
    assert!(json["expiryDate"].is_string());

    let clicks = json["clickDetails"].as_array().unwrap();
    assert_eq!(clicks.len(), 2);
    assert_eq!(clicks[0]["userAgent"], "agent-a");
    assert_eq!(clicks[1]["userAgent"], "agent-b");
    assert_eq!(clicks[0]["referer"], "Direct");
    assert_eq!(clicks[0]["location"], "Unknown");
    assert!(clicks[0].get("clientIdentifier").is_none());
}

#[tokio::test]
async fn test_stats_not_found() {
    let ctx = common::create_test_state();
    let server = server(ctx.state);

    let response = server.get("/shorturls/nonexistent").await;

    assert_eq!(response.status_code(), 404);
    assert_eq!(response.json::<Value>()["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_stats_for_expired_entry() {
    let ctx = common::create_test_state();
    common::create_expired_entry(&ctx.store, "old", "https://example.com/old");
    let server = server(ctx.state);

    let response = server.get("/shorturls/OLD").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["shortCode"], "old");
    assert_eq!(json["totalClicks"], 0);
    assert_eq!(json["clickDetails"], serde_json::json!([]));
}

#[tokio::test]
async fn test_all_urls_empty() {
    let ctx = common::create_test_state();
    let server = server(ctx.state);

    let response = server.get("/api/all-urls").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), serde_json::json!([]));
}

#[tokio::test]
async fn test_all_urls_in_creation_order() {
    let mut ctx = common::create_test_state();
    let registry = ctx.state.registry.clone();

    for code in ["zeta", "alpha", "mid"] {
        registry
            .create(NewEntry::new(format!("https://example.com/{code}")).with_custom_code(code))
            .unwrap();
    }
    common::create_expired_entry(&ctx.store, "gone", "https://example.com/gone");
    registry
        .resolve("alpha", RequestContext::default())
        .unwrap();
    common::drain_telemetry(&mut ctx.telemetry_rx);

    let server = server(ctx.state);
    let response = server.get("/api/all-urls").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    let codes: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["shortCode"].as_str().unwrap().to_string())
        .collect();

    assert_eq!(codes, vec!["zeta", "alpha", "mid", "gone"]);
    assert_eq!(json[1]["totalClicks"], 1);

    let events = common::drain_telemetry(&mut ctx.telemetry_rx);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].message, "All URLs statistics retrieved");
}
